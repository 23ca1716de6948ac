//! Headless userpic showcase.
//!
//! Builds the same rows as the library's demo app, lays each one out, and
//! prints the resulting draw commands. A second pass pretends every Gravatar
//! request failed, which exercises the fallback to initials / placeholder.
//!
//! ```text
//! userpic-gallery [FONT_PATH] [--scale N] [--dark]
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use userpic_engine::coords::PixelRatio;
use userpic_engine::logging::{init_logging, LoggingConfig};
use userpic_engine::scene::DrawCmd;
use userpic_ui::prelude::*;

const JASON: &str = "jasonsmith@mailto.plus";
const AMANDA: &str = "amandastone@mailto.plus";
const LUCY: &str = "lucyfoster@mailto.plus";

const PHOTOS: [&str; 3] = [
    "https://minimaltoolkit.com/images/randomdata/male/62.jpg",
    "https://minimaltoolkit.com/images/randomdata/male/46.jpg",
    "https://minimaltoolkit.com/images/randomdata/female/96.jpg",
];

struct Args {
    font: Option<PathBuf>,
    scale: f32,
    dark: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { font: None, scale: 1.0, dark: false };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--scale" => {
                let v = it.next().context("--scale needs a value")?;
                args.scale = v.parse().with_context(|| format!("invalid --scale {v:?}"))?;
            }
            "--dark" => args.dark = true,
            s if s.starts_with("--") => bail!("unknown flag {s}"),
            _ => args.font = Some(PathBuf::from(arg)),
        }
    }
    Ok(args)
}

fn rows(font: Option<FontId>) -> Result<Vec<(&'static str, Element)>> {
    let base = || {
        let u = Userpic::new();
        match font {
            Some(f) => u.font(f),
            None => u,
        }
    };
    let row = |items: Vec<Userpic>| -> Element { Flex::row().spacing(16.0).children(items).into() };
    let status = Badge::new(BadgeValue::Dot).size(24.0).color(Color::white());
    let green = Color::from_hex("#34c759").context("badge green")?;
    let blue = Color::from_hex("#007aff").context("badge blue")?;

    Ok(vec![
        ("Shape", row(vec![
            base().corner_radius(0.0),
            base().corner_radius(Dimension::parse_lenient("25%")),
            base().corner_radius(Dimension::parse_lenient("50%")),
        ])),
        ("No image", row(vec![
            base(),
            base().default_source(ImageSource::uri("assets/custom.png")),
            base().name("👩"),
        ])),
        ("Initials", row(vec![
            base().name("Nick"),
            base().name("Jason Smith").colorize(true),
            base().name("Emma Miller").colorize(true),
        ])),
        ("Image", row(PHOTOS.iter().map(|uri| base().source(ImageSource::uri(*uri))).collect())),
        ("Gravatar", row(vec![
            base().corner_radius(10.0).email(JASON).name("Jason Smith"),
            base().corner_radius(10.0).email(AMANDA).name("Amanda Stone"),
            base().corner_radius(10.0).email(LUCY),
        ])),
        ("Badge", row(vec![
            base().email(JASON).badge(BadgeValue::from_bool(true)).badge_color(green),
            base().email(AMANDA).badge(BadgeValue::from_count(3)).badge_color(blue),
            base().email(LUCY).badge(BadgeValue::from_count(100)),
        ])),
        ("Status", row(vec![
            base().email(JASON).badge(BadgeValue::from_label("👋")).badge_style(status.clone()),
            base().email(AMANDA).badge(BadgeValue::from_label("😀")).badge_style(status.clone()),
            base().email(LUCY).badge(BadgeValue::from_label("🐵")).badge_style(status),
        ])),
        ("Size", row(vec![
            base().corner_radius(Dimension::Percent(25)).size(30.0).email(JASON),
            base().corner_radius(Dimension::Percent(25)).size(50.0).email(AMANDA),
            base().corner_radius(Dimension::Percent(25)).size(75.0).email(LUCY),
        ])),
    ])
}

fn describe(cmd: &DrawCmd) -> String {
    match cmd {
        DrawCmd::RoundedRect(r) if r.radii.is_uniform() => format!(
            "{:>12} {:>6.1},{:>6.1} {:>5.1}x{:<5.1} r={:<5.1} {}",
            cmd.kind(), r.rect.origin.x, r.rect.origin.y, r.rect.size.x, r.rect.size.y,
            r.radii.top_left, r.color.to_hex(),
        ),
        DrawCmd::RoundedRect(r) => format!("{:>12} {:?} {:?} {}", cmd.kind(), r.rect, r.radii, r.color.to_hex()),
        DrawCmd::Circle(c) => format!(
            "{:>12} {:>6.1},{:>6.1} r={:<5.1} {}",
            cmd.kind(), c.center.x, c.center.y, c.radius, c.color.to_hex(),
        ),
        DrawCmd::Text(t) => format!(
            "{:>12} {:>6.1},{:>6.1} {:.0}px {:?}",
            cmd.kind(), t.origin.x, t.origin.y, t.size, t.text,
        ),
        DrawCmd::Image(i) => format!(
            "{:>12} {:>6.1},{:>6.1} {:>5.1}x{:<5.1} r={:<5.1} {}",
            cmd.kind(), i.rect.origin.x, i.rect.origin.y, i.rect.size.x, i.rect.size.y,
            i.radii.top_left, i.source,
        ),
    }
}

fn print_frame(title: &str, scene: &mut UiScene, rows: &mut [(&'static str, Element)], input: &UiInput) {
    println!("== {title}");
    for (label, root) in rows.iter_mut() {
        let ctx = LayoutCtx::new(&scene.font_system, scene.config().pixels);
        let viewport = root.measure(Constraints::unbounded(), &ctx);
        println!("-- {label}");
        for item in scene.frame_ref(root, viewport, input).iter_in_paint_order() {
            println!("   {}", describe(&item.cmd));
        }
    }
    println!();
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args()?;

    let theme = if args.dark { Theme::DARK } else { Theme::LIGHT };
    let mut scene = UiScene::new(SceneConfig { pixels: PixelRatio::new(args.scale), theme });

    let font = match &args.font {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
            Some(scene.load_font(&bytes).with_context(|| format!("parsing font {}", path.display()))?)
        }
        None => {
            log::warn!("no font given; initials and badge labels will not be drawn");
            None
        }
    };

    let mut rows = rows(font)?;
    print_frame("initial", &mut scene, &mut rows, &UiInput::default());

    // Offline: every Gravatar lookup 404s.
    let pixels = scene.config().pixels;
    let image_failures = [JASON, AMANDA, LUCY]
        .into_iter()
        .map(gravatar_hash)
        .flat_map(|hash| [30.0, 50.0, 75.0].map(|size| ImageSource::gravatar(&hash, pixels.pixel_size_for_layout_size(size))))
        .collect();
    print_frame("gravatar offline", &mut scene, &mut rows, &UiInput { image_failures });

    Ok(())
}
