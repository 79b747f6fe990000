//! Export layout arithmetic
//!
//! Rasterizing a rendered sheet is done by the presentation layer. This
//! module only fixes the raster settings and works out how a raster of a
//! given size is tiled onto A4 pages. Pages are cut at fixed heights with no
//! attempt to avoid splitting a line of text.

use std::fmt;

/// Background painted behind the sheet before rasterizing
pub const DEFAULT_BACKGROUND: &str = "#1a1a2e";

/// Device-pixel scale used when rasterizing
pub const DEFAULT_SCALE: f64 = 2.0;

/// Artifact type produced by an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single raster image
    Png,
    /// Raster tiled across A4 pages
    Pdf,
}

impl ExportFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Download file name for a given stem
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

/// Settings handed to the rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSettings {
    /// Device-pixel scale
    pub scale: f64,
    /// CSS color painted behind the content
    pub background: String,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Upper bound on the pages one export may produce
pub const MAX_PAGES: usize = 1000;

/// Errors from page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The raster has zero width, so it cannot be scaled to page width
    EmptyRaster,
    /// The page has a non-positive dimension
    InvalidPage(String),
    /// The scaled raster would need more than [`MAX_PAGES`] pages
    TooManyPages(usize),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyRaster => write!(f, "raster has zero width"),
            ExportError::InvalidPage(msg) => write!(f, "invalid page layout: {}", msg),
            ExportError::TooManyPages(pages) => {
                write!(f, "raster needs {} pages, more than the limit of {}", pages, MAX_PAGES)
            }
        }
    }
}

impl std::error::Error for ExportError {}

/// One PDF page: where the full raster is drawn so this page shows its slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice {
    /// Zero-based page number
    pub index: usize,
    /// Vertical offset of the image on this page, in mm (zero or negative)
    pub y_offset_mm: f64,
    /// Width the image is drawn at, in mm
    pub image_width_mm: f64,
    /// Height the image is drawn at, in mm
    pub image_height_mm: f64,
}

/// PDF page geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPageLayout {
    /// Page width in mm
    pub page_width_mm: f64,
    /// Page height in mm
    pub page_height_mm: f64,
}

impl PdfPageLayout {
    /// Portrait A4
    pub fn a4() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
        }
    }

    /// Printable width; the raster is scaled to fill it
    pub fn printable_width_mm(&self) -> f64 {
        self.page_width_mm
    }

    /// Height of the raster once scaled to printable width
    pub fn scaled_height_mm(&self, raster_width_px: u32, raster_height_px: u32) -> Result<f64, ExportError> {
        self.check()?;
        if raster_width_px == 0 {
            return Err(ExportError::EmptyRaster);
        }
        Ok(f64::from(raster_height_px) * self.printable_width_mm() / f64::from(raster_width_px))
    }

    /// Number of pages: `ceil(scaled_height / page_height)`, at least one
    ///
    /// Fails with [`ExportError::TooManyPages`] above [`MAX_PAGES`].
    pub fn page_count(&self, raster_width_px: u32, raster_height_px: u32) -> Result<usize, ExportError> {
        let scaled = self.scaled_height_mm(raster_width_px, raster_height_px)?;
        let pages = (scaled / self.page_height_mm).ceil();
        if pages > MAX_PAGES as f64 {
            return Err(ExportError::TooManyPages(pages as usize));
        }
        Ok((pages as usize).max(1))
    }

    /// Tile the raster top to bottom across pages
    ///
    /// # Examples
    ///
    /// ```
    /// use loresmith_domain::PdfPageLayout;
    ///
    /// // 1000 x 3000 px scales to 210 x 630 mm: three A4 pages
    /// let pages = PdfPageLayout::a4().paginate(1000, 3000).unwrap();
    /// assert_eq!(pages.len(), 3);
    /// assert_eq!(pages[1].y_offset_mm, -297.0);
    /// ```
    pub fn paginate(&self, raster_width_px: u32, raster_height_px: u32) -> Result<Vec<PageSlice>, ExportError> {
        let image_height_mm = self.scaled_height_mm(raster_width_px, raster_height_px)?;
        let count = self.page_count(raster_width_px, raster_height_px)?;

        Ok((0..count)
            .map(|index| PageSlice {
                index,
                y_offset_mm: -(index as f64) * self.page_height_mm,
                image_width_mm: self.printable_width_mm(),
                image_height_mm,
            })
            .collect())
    }

    fn check(&self) -> Result<(), ExportError> {
        if self.page_width_mm.is_nan() || self.page_width_mm <= 0.0 {
            return Err(ExportError::InvalidPage(format!(
                "page width {} must be positive",
                self.page_width_mm
            )));
        }
        if self.page_height_mm.is_nan() || self.page_height_mm <= 0.0 {
            return Err(ExportError::InvalidPage(format!(
                "page height {} must be positive",
                self.page_height_mm
            )));
        }
        Ok(())
    }
}

impl Default for PdfPageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Png.file_name("rex"), "rex.png");
        assert_eq!(ExportFormat::Pdf.file_name("rex-timeline"), "rex-timeline.pdf");
    }

    #[test]
    fn test_default_raster_settings() {
        let settings = RasterSettings::default();
        assert_eq!(settings.scale, 2.0);
        assert_eq!(settings.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_short_raster_fits_one_page() {
        let pages = PdfPageLayout::a4().paginate(2000, 500).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].y_offset_mm, 0.0);
        assert!((pages[0].image_height_mm - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_exact_multiple_does_not_add_page() {
        // 210 px wide maps 1 px to 1 mm, so 594 px is exactly two pages
        let layout = PdfPageLayout::a4();
        assert_eq!(layout.page_count(210, 594).unwrap(), 2);
        assert_eq!(layout.page_count(210, 595).unwrap(), 3);
    }

    #[test]
    fn test_zero_height_still_one_page() {
        assert_eq!(PdfPageLayout::a4().page_count(800, 0).unwrap(), 1);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            PdfPageLayout::a4().paginate(0, 100),
            Err(ExportError::EmptyRaster)
        );
    }

    #[test]
    fn test_page_limit_at_u32_extremes() {
        let layout = PdfPageLayout::a4();
        match layout.paginate(1, u32::MAX) {
            Err(ExportError::TooManyPages(pages)) => assert!(pages > MAX_PAGES),
            other => panic!("Expected TooManyPages, got {:?}", other),
        }
        assert_eq!(layout.page_count(u32::MAX, u32::MAX).unwrap(), 1);
        assert_eq!(layout.page_count(u32::MAX, 0).unwrap(), 1);
    }

    #[test]
    fn test_page_limit_boundary() {
        // 210 px wide maps 1 px to 1 mm
        let layout = PdfPageLayout::a4();
        let at_limit = 297 * MAX_PAGES as u32;
        assert_eq!(layout.paginate(210, at_limit).unwrap().len(), MAX_PAGES);
        assert_eq!(
            layout.page_count(210, at_limit + 1),
            Err(ExportError::TooManyPages(MAX_PAGES + 1))
        );
    }

    #[test]
    fn test_invalid_page_rejected() {
        let layout = PdfPageLayout {
            page_width_mm: 0.0,
            page_height_mm: 297.0,
        };
        assert!(matches!(
            layout.paginate(100, 100),
            Err(ExportError::InvalidPage(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: page count follows ceil(scaled / page) and offsets tile the image
        #[test]
        fn test_pages_cover_scaled_image(width in 100u32..5000, height in 0u32..50_000) {
            let layout = PdfPageLayout::a4();
            let pages = layout.paginate(width, height).unwrap();
            let scaled = f64::from(height) * 210.0 / f64::from(width);
            let expected = ((scaled / 297.0).ceil() as usize).max(1);

            prop_assert_eq!(pages.len(), expected);
            for (i, page) in pages.iter().enumerate() {
                prop_assert_eq!(page.index, i);
                prop_assert!(page.y_offset_mm <= 0.0);
                // Every page starts inside the image (or at its top when empty)
                prop_assert!(-page.y_offset_mm <= scaled.max(0.0) || i == 0);
            }
        }
    }
}
