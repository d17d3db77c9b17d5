use anyhow::Context;
use pxfont::config::RenderConfig;
use pxfont::export::save_png;
use pxfont::render::{render_text, Color, Framebuffer};

const FB_WIDTH: u32 = 400;
const FB_HEIGHT: u32 = 100;
const OUTPUT_FILENAME: &str = "pxsim_framebuffer_output.png";

const WELCOME_TEXT: &str = "Welcome to PXOS!\n\
This is a pixel-native environment.\n\
We can now write text directly to the framebuffer.\n\
Testing extended char: æ, and symbols: !@#$%^&*()_+-=[]{}\\|;:'\",.<>/?\n\
print('Hello PXOS!')";

/// Usage: `cargo run --example framebuffer [output.png] [config.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| OUTPUT_FILENAME.to_string());

    // Start 10 pixels in from the top-left corner, one pixel between
    // characters and two between lines. A JSON config file can override
    // any of these.
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read config {path}"))?;
            RenderConfig::from_json_str(&json)?
        }
        None => RenderConfig::builder()
            .start(10, 10)
            .char_spacing(1)
            .line_spacing(2)
            .build()?,
    };

    // Blank white framebuffer, the same color as unlit glyph cells
    let mut framebuffer = Framebuffer::new(FB_WIDTH, FB_HEIGHT, Color::WHITE);

    let outcome = render_text(&mut framebuffer, WELCOME_TEXT, &config);
    log::info!(
        "drew {} glyphs, cursor ended at {:?}{}",
        outcome.glyphs_drawn,
        outcome.cursor,
        if outcome.truncated { " (truncated)" } else { "" }
    );

    save_png(&framebuffer, &output).with_context(|| format!("cannot save {output}"))?;
    log::info!("framebuffer with text saved as {output}");

    Ok(())
}
