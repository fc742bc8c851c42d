//! genpdf elements used by the vendor document that genpdf does not ship with.

use std::path::Path;

use image::GenericImageView;

use genpdf::elements::Image;
use genpdf::error::{Context as _, Error};
use genpdf::style::{Style, StyledString};
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Scale, Size};

const DEFAULT_IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
const DEFAULT_UNDERLINE_OFFSET_MM: f64 = 0.4;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// Loads the logo and scales it to `width_mm`, keeping the aspect ratio.
///
/// The image is flattened to RGB because genpdf cannot embed images with an alpha channel.
pub fn logo_from_path(path: impl AsRef<Path>, width_mm: f64) -> Result<Image, Error> {
    let path = path.as_ref();
    let decoded = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open logo file {}", path.display()))?
        .with_guessed_format()
        .context("Unable to determine logo image format")?
        .decode()
        .with_context(|| format!("Failed to decode logo file {}", path.display()))?;

    let (px_width, _) = decoded.dimensions();
    let natural_width_mm = MM_PER_INCH * f64::from(px_width) / DEFAULT_IMAGE_DPI;
    let rgb = image::DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut logo = Image::from_dynamic_image(rgb)?;
    logo.set_alignment(Alignment::Center);
    if natural_width_mm > f64::EPSILON {
        let scale = width_mm / natural_width_mm;
        logo.set_scale(Scale::new(scale, scale));
    }
    Ok(logo)
}

/// A single line of text drawn with an underline, used for hyperlink-style values.
///
/// genpdf has no link annotations, so the target itself is not embedded in the page.
pub struct LinkText {
    text: StyledString,
    underline_offset: Mm,
}

impl LinkText {
    pub fn new(text: impl Into<StyledString>) -> Self {
        Self {
            text: text.into(),
            underline_offset: mm_from_f64(DEFAULT_UNDERLINE_OFFSET_MM),
        }
    }
}

impl Element for LinkText {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut string = self.text.clone();
        string.style = style.and(string.style);

        let width = string.width(&context.font_cache);
        let line_height = string.style.line_height(&context.font_cache);
        let glyph_height = string
            .style
            .font(&context.font_cache)
            .glyph_height(string.style.font_size());

        let mut result = RenderResult::default();
        if line_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        match area.text_section(&context.font_cache, Position::new(0, 0), string.style) {
            Some(mut section) => section.print_str(&string.s, string.style)?,
            None => {
                result.has_more = true;
                return Ok(result);
            }
        }

        let baseline = glyph_height + self.underline_offset;
        let mut line_style = Style::new();
        if let Some(color) = string.style.color() {
            line_style = line_style.with_color(color);
        }
        area.draw_line(
            vec![Position::new(0, baseline), Position::new(width, baseline)],
            line_style,
        );

        result.size = Size::new(width, line_height);
        area.add_offset(Position::new(0, line_height));
        Ok(result)
    }
}
