use argh::FromArgs;
use embedded_graphics::Pixel;
use monobmp_core::{bitmap::PackedBitmap, res::img::dorian};

#[derive(FromArgs)]
/// Preview options
struct Args {
    /// window scale factor (1, 2 or 4)
    #[argh(option, short = 's', default = "2")]
    scale: u8,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let scale = match args.scale {
        1 => minifb::Scale::X1,
        2 => minifb::Scale::X2,
        4 => minifb::Scale::X4,
        _ => panic!("Unsupported scale factor (use 1, 2 or 4)"),
    };

    let bitmap = PackedBitmap::new(dorian::DORIAN, dorian::WIDTH, dorian::HEIGHT)
        .expect("Embedded bitmap does not match its declared dimensions");
    log::info!("Previewing {}x{} bitmap", bitmap.width(), bitmap.height());

    let width = bitmap.width() as usize;
    let height = bitmap.height() as usize;
    let mut display_buffer = vec![0u32; width * height];
    for Pixel(point, color) in bitmap.pixels() {
        display_buffer[point.y as usize * width + point.x as usize] = if color.is_on() {
            0xFFFFFFFF
        } else {
            0xFF000000
        };
    }

    let options = minifb::WindowOptions {
        borderless: false,
        title: true,
        resize: true,
        scale,
        ..minifb::WindowOptions::default()
    };
    let mut window = minifb::Window::new("Monobmp Preview", width, height, options)
        .unwrap_or_else(|e| {
            panic!("Unable to open window: {}", e);
        });
    window.set_target_fps(5);

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        window
            .update_with_buffer(&display_buffer, width, height)
            .expect("Failed to update window");
    }
}
