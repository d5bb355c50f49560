pub mod csv;

pub use self::csv::{
    CsvLayout, ExportError, ExportFile, FuelCsv, PrestartCsv, UsageCsv, export_csv,
    export_file_name, render_csv,
};
