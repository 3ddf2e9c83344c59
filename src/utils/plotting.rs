use crate::error::{Result, SurfaceError};
use crate::models::PriceSurface;
use colorous::VIRIDIS;
use image::ImageFormat;
use plotters::backend::BitMapBackend;
use plotters::prelude::*;
use std::path::Path;

/// Canvas size, the original script's 10x7 inch figure at 100 dpi.
const FIGURE_WIDTH: u32 = 1000;
const FIGURE_HEIGHT: u32 = 700;

/// Fixed vertical range of the option-price axis.
const PRICE_AXIS: (f64, f64) = (0.0, 1.0);

/// A rendered figure held in memory before it is written out.
///
/// Pixels are tightly packed RGB8, row-major.
#[derive(Debug, Clone)]
pub struct SurfaceFigure {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Render a price surface and write it straight to a PNG file.
pub fn plot_price_surface<P: AsRef<Path>>(surface: &PriceSurface, output_path: P) -> Result<()> {
    let figure = render_price_surface(surface)?;
    write_figure(&figure, output_path)
}

/// Write a rendered figure to `output_path` as PNG.
///
/// An existing file of that name is overwritten unconditionally.
pub fn write_figure<P: AsRef<Path>>(figure: &SurfaceFigure, output_path: P) -> Result<()> {
    image::save_buffer_with_format(
        output_path.as_ref(),
        &figure.pixels,
        figure.width,
        figure.height,
        image::ExtendedColorType::Rgb8,
        ImageFormat::Png,
    )?;

    Ok(())
}

/// 3D plot of option price vs. spot and time to maturity
///
/// Draws one filled quad per grid cell, viridis-colored by price and outlined
/// in black, inside a fixed [0, 1] vertical range, with axis labels and a
/// color bar.
pub fn render_price_surface(surface: &PriceSurface) -> Result<SurfaceFigure> {
    let (price_min, price_max) = surface.price_range().ok_or_else(|| {
        SurfaceError::RenderError("surface contains no finite option prices".to_string())
    })?;

    let min_spot = surface.spots.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    let max_spot = surface
        .spots
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let min_time = surface
        .maturities
        .iter()
        .fold(f64::INFINITY, |a, &b| a.min(b));
    let max_time = surface
        .maturities
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));

    if !(min_spot.is_finite()
        && max_spot.is_finite()
        && min_time.is_finite()
        && max_time.is_finite())
    {
        return Err(SurfaceError::RenderError(
            "surface contains no finite spot or maturity coordinates".to_string(),
        ));
    }

    let spot_range = max_spot - min_spot;
    let time_range = max_time - min_time;
    let spot_pad = if spot_range > 0.0 {
        0.05 * spot_range
    } else {
        0.5
    };
    let time_pad = if time_range > 0.0 {
        0.05 * time_range
    } else {
        0.5
    };
    let spot_axis = (min_spot - spot_pad)..(max_spot + spot_pad);
    let time_axis = (min_time - time_pad)..(max_time + time_pad);

    let price_span = if (price_max - price_min).abs() < 1e-15 {
        1.0
    } else {
        price_max - price_min
    };

    let mut buffer = vec![0u8; (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (FIGURE_WIDTH, FIGURE_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Option Price Surface", ("sans-serif", 30).into_font())
            .margin(20)
            .build_cartesian_3d(spot_axis, PRICE_AXIS.0..PRICE_AXIS.1, time_axis)
            .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        chart.with_projection(|mut pb| {
            pb.yaw = 0.5;
            pb.pitch = 0.35;
            pb.scale = 0.8;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.15))
            .max_light_lines(3)
            .label_style(("sans-serif", 12))
            .draw()
            .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        let color_gradient = VIRIDIS;

        // Ascending row/column order layers far cells before near ones under
        // the projection above.
        let (rows, cols) = surface.shape();
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let corners = [[i, j], [i, j + 1], [i + 1, j + 1], [i + 1, j]];

                let mut quad = Vec::with_capacity(4);
                let mut price_sum = 0.0;
                let mut finite = true;
                for corner in corners {
                    let spot = surface.spots[corner];
                    let maturity = surface.maturities[corner];
                    let price = surface.prices[corner];
                    if !(spot.is_finite() && maturity.is_finite() && price.is_finite()) {
                        finite = false;
                        break;
                    }
                    price_sum += price;
                    quad.push((spot, price.clamp(PRICE_AXIS.0, PRICE_AXIS.1), maturity));
                }
                if !finite {
                    continue;
                }

                let normalized_price =
                    ((price_sum / 4.0 - price_min) / price_span).clamp(0.0, 1.0);
                let color = color_gradient.eval_continuous(normalized_price);
                let rgb = RGBColor(color.r, color.g, color.b);

                chart
                    .draw_series(std::iter::once(Polygon::new(quad.clone(), rgb.filled())))
                    .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

                let mut outline = quad;
                outline.push(outline[0]);
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        outline,
                        BLACK.stroke_width(1),
                    )))
                    .map_err(|e| SurfaceError::RenderError(e.to_string()))?;
            }
        }

        root.draw_text(
            "S (Spot Price)",
            &TextStyle::from(("sans-serif", 15)).color(&BLACK),
            (200, 635),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.draw_text(
            "T - t (Time to Maturity)",
            &TextStyle::from(("sans-serif", 15)).color(&BLACK),
            (590, 635),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.draw_text(
            "C(S, t) (Option Price)",
            &TextStyle::from(("sans-serif", 15)).color(&BLACK),
            (30, 170),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        let color_bar_width = 18;
        let color_bar_height = 380;
        let color_bar_x = 905;
        let color_bar_y = 150;

        for i in 0..color_bar_height {
            let normalized_pos = 1.0 - (i as f64 / color_bar_height as f64);
            let color = color_gradient.eval_continuous(normalized_pos);
            let rgb = RGBColor(color.r, color.g, color.b);

            root.draw(&Rectangle::new(
                [
                    (color_bar_x, color_bar_y + i),
                    (color_bar_x + color_bar_width, color_bar_y + i + 1),
                ],
                rgb.filled(),
            ))
            .map_err(|e| SurfaceError::RenderError(e.to_string()))?;
        }

        root.draw_text(
            "Option Price",
            &TextStyle::from(("sans-serif", 14)).color(&BLACK),
            (color_bar_x - 18, color_bar_y - 24),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.draw_text(
            &format!("{:.2}", price_max),
            &TextStyle::from(("sans-serif", 12)).color(&BLACK),
            (color_bar_x + color_bar_width + 5, color_bar_y),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.draw_text(
            &format!("{:.2}", price_min),
            &TextStyle::from(("sans-serif", 12)).color(&BLACK),
            (
                color_bar_x + color_bar_width + 5,
                color_bar_y + color_bar_height,
            ),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.draw_text(
            &format!(
                "Generated: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ),
            &TextStyle::from(("sans-serif", 13)).color(&BLACK),
            (10, (FIGURE_HEIGHT - 25) as i32),
        )
        .map_err(|e| SurfaceError::RenderError(e.to_string()))?;

        root.present()
            .map_err(|e| SurfaceError::RenderError(e.to_string()))?;
    }

    Ok(SurfaceFigure {
        width: FIGURE_WIDTH,
        height: FIGURE_HEIGHT,
        pixels: buffer,
    })
}
