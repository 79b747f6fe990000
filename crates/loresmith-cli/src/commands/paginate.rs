//! Paginate command implementation.

use crate::cli::PaginateArgs;
use crate::error::Result;
use crate::output::Formatter;
use loresmith_domain::PdfPageLayout;

/// Execute the paginate command.
pub async fn execute_paginate(args: PaginateArgs, formatter: &Formatter) -> Result<()> {
    let pages = PdfPageLayout::a4().paginate(args.width, args.height)?;
    println!("{}", formatter.format_page_plan(&pages)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use loresmith_domain::ExportError;

    #[tokio::test]
    async fn test_zero_width_is_export_error() {
        let args = PaginateArgs { width: 0, height: 100 };
        let result = execute_paginate(args, &Formatter::new(OutputFormat::Quiet, false)).await;
        assert!(matches!(result, Err(CliError::Export(ExportError::EmptyRaster))));
    }

    #[tokio::test]
    async fn test_oversized_raster_is_rejected() {
        let args = PaginateArgs { width: 1, height: u32::MAX };
        let result = execute_paginate(args, &Formatter::new(OutputFormat::Quiet, false)).await;
        assert!(matches!(result, Err(CliError::Export(ExportError::TooManyPages(_)))));
    }
}
