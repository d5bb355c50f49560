use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::AssetCode).string())
                    .col(ColumnDef::new(Vehicles::Rego).string())
                    .col(ColumnDef::new(Vehicles::State).string())
                    .col(ColumnDef::new(Vehicles::OwnershipType).string())
                    .to_owned(),
            )
            .await?;

        // Records keep their vehicle_id even when the vehicle is gone, so no FK
        manager
            .create_table(
                Table::create()
                    .table(FuelTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelTransactions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FuelTransactions::VehicleId).string())
                    .col(ColumnDef::new(FuelTransactions::TransactionDatetime).date_time())
                    .col(ColumnDef::new(FuelTransactions::Litres).double())
                    .col(ColumnDef::new(FuelTransactions::UnitPrice).double())
                    .col(ColumnDef::new(FuelTransactions::TotalCost).double())
                    .col(ColumnDef::new(FuelTransactions::SiteLocation).string())
                    .col(ColumnDef::new(FuelTransactions::FuelType).string())
                    .col(ColumnDef::new(FuelTransactions::OdometerAtFill).double())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PrestartChecks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrestartChecks::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrestartChecks::VehicleId).string())
                    .col(ColumnDef::new(PrestartChecks::PrestartDatetime).date_time())
                    .col(ColumnDef::new(PrestartChecks::OperatorName).string())
                    .col(ColumnDef::new(PrestartChecks::PrestartType).string())
                    .col(ColumnDef::new(PrestartChecks::OverallResult).string())
                    .col(ColumnDef::new(PrestartChecks::DefectCount).integer())
                    .col(ColumnDef::new(PrestartChecks::ClientName).string())
                    .col(ColumnDef::new(PrestartChecks::ProjectName).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UsageRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UsageRecords::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UsageRecords::VehicleId).string())
                    .col(ColumnDef::new(UsageRecords::UsageDate).date())
                    .col(ColumnDef::new(UsageRecords::TotalHours).double())
                    .col(ColumnDef::new(UsageRecords::KmTravelled).double())
                    .col(ColumnDef::new(UsageRecords::JobsCount).integer())
                    .col(ColumnDef::new(UsageRecords::ProjectCode).string())
                    .col(ColumnDef::new(UsageRecords::OwnershipTypeSnapshot).string())
                    .col(ColumnDef::new(UsageRecords::IsOffline).boolean())
                    .col(ColumnDef::new(UsageRecords::Source).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HireProviders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HireProviders::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HireProviders::Name).string().not_null())
                    .col(ColumnDef::new(HireProviders::ContactName).string())
                    .col(ColumnDef::new(HireProviders::ContactPhone).string())
                    .col(ColumnDef::new(HireProviders::ContactEmail).string())
                    .col(ColumnDef::new(HireProviders::Address).string())
                    .col(ColumnDef::new(HireProviders::Notes).string())
                    .col(
                        ColumnDef::new(HireProviders::Status)
                            .string()
                            .default("Active"),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing pages read newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fuel_transactions_datetime")
                    .table(FuelTransactions::Table)
                    .col(FuelTransactions::TransactionDatetime)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_prestart_checks_datetime")
                    .table(PrestartChecks::Table)
                    .col(PrestartChecks::PrestartDatetime)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_usage_records_date")
                    .table(UsageRecords::Table)
                    .col(UsageRecords::UsageDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HireProviders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UsageRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrestartChecks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FuelTransactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    AssetCode,
    Rego,
    State,
    OwnershipType,
}

#[derive(DeriveIden)]
enum FuelTransactions {
    Table,
    Id,
    VehicleId,
    TransactionDatetime,
    Litres,
    UnitPrice,
    TotalCost,
    SiteLocation,
    FuelType,
    OdometerAtFill,
}

#[derive(DeriveIden)]
enum PrestartChecks {
    Table,
    Id,
    VehicleId,
    PrestartDatetime,
    OperatorName,
    PrestartType,
    OverallResult,
    DefectCount,
    ClientName,
    ProjectName,
}

#[derive(DeriveIden)]
enum UsageRecords {
    Table,
    Id,
    VehicleId,
    UsageDate,
    TotalHours,
    KmTravelled,
    JobsCount,
    ProjectCode,
    OwnershipTypeSnapshot,
    IsOffline,
    Source,
}

#[derive(DeriveIden)]
enum HireProviders {
    Table,
    Id,
    Name,
    ContactName,
    ContactPhone,
    ContactEmail,
    Address,
    Notes,
    Status,
}
