/// Basic example: render a small piece of ASCII art to PNG
///
/// Uses the first available system monospace font, or the built-in font.
use ascii2png::{AsciiArt, RenderConfig, render};

const ART: &str = r#"
  /\_/\
 ( o.o )
  > ^ <
"#;

fn main() {
    println!("ascii2png - Basic Example");
    println!("=========================\n");

    let art = AsciiArt::parse(ART).expect("art has content");
    println!(
        "Loaded {} lines, widest is {} chars",
        art.line_count(),
        art.max_width()
    );

    let config = RenderConfig::default().with_font_size(24.0).with_padding(16);
    let rendering = render(&art, &config).expect("Failed to render");

    println!("Font:  {}", rendering.font);
    println!("Cell:  {}x{}", rendering.cell.width, rendering.cell.height);

    rendering
        .image
        .save("basic_output.png")
        .expect("Failed to save output");

    let (width, height) = rendering.image.dimensions();
    println!("✓ Saved basic_output.png ({}x{})", width, height);
}
