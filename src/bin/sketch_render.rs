//! sketch-render - draw a demo scene covering every primitive to a PNG.
//!
//! Usage: `sketch-render [OUTPUT.png] [CONFIG.yaml]`
//!
//! Set `RUST_LOG=trueno_sketch=debug` to see degenerate-shape handling.

use trueno_sketch::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "sketch.png".to_string());

    let mut sketch = Sketch::with_config(load_config(args.next()));
    sketch.create_canvas(WIDTH, HEIGHT)?;
    draw_scene(&mut sketch)?;
    sketch.save_png(&output)?;

    tracing::info!(path = %output, "scene rendered");
    Ok(())
}

#[cfg(feature = "config")]
fn load_config(path: Option<String>) -> RasterConfig {
    match path {
        Some(path) => RasterConfig::load_or_default(path),
        None => RasterConfig::default(),
    }
}

#[cfg(not(feature = "config"))]
fn load_config(path: Option<String>) -> RasterConfig {
    if path.is_some() {
        tracing::warn!("built without the `config` feature, ignoring config path");
    }
    RasterConfig::default()
}

fn draw_scene(s: &mut Sketch) -> Result<()> {
    s.background(Rgba::gray(235))?;

    // Filled and stroked rectangle, then a hollow square
    s.fill(Rgba::rgb(70, 130, 180));
    s.stroke(Rgba::BLACK);
    s.stroke_weight(3.0)?;
    s.rect(20.0, 20.0, 120.0, 80.0)?;

    s.no_fill();
    s.stroke(Rgba::rgb(200, 30, 30));
    s.square(160.0, 20.0, 80.0)?;

    // Ellipse and circle
    s.fill(Rgba::rgb(250, 200, 60));
    s.stroke(Rgba::rgb(120, 60, 0));
    s.stroke_weight(2.0)?;
    s.ellipse(320.0, 60.0, 60.0, 35.0)?;
    s.no_stroke();
    s.circle(80.0, 190.0, 45.0)?;

    // Triangles, including one collapsed to a point
    s.fill(Rgba::rgb(60, 170, 90));
    s.stroke(Rgba::BLACK);
    s.stroke_weight(1.0)?;
    s.triangle(160.0, 250.0, 240.0, 130.0, 300.0, 260.0)?;
    s.stroke_weight(6.0)?;
    s.triangle(360.0, 200.0, 360.0, 200.0, 360.0, 200.0)?;

    // Lines and points
    s.stroke(Rgba::BLUE);
    for (i, weight) in [1.0, 2.0, 4.0, 8.0].into_iter().enumerate() {
        let y = 150.0 + 30.0 * i as f64;
        s.stroke_weight(weight)?;
        s.line(320.0, y, 390.0, y - 20.0)?;
    }
    s.stroke(Rgba::rgb(128, 0, 128));
    s.stroke_weight(5.0)?;
    for i in 0..5 {
        s.point(20.0 + 15.0 * f64::from(i), 285.0)?;
    }

    Ok(())
}
