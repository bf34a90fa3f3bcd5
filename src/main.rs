use getopts::Options;
use glintrace::renderer::{RenderConfig, Renderer};
use glintrace::util::{create_output_dir, format_elapsed};
use glintrace::*;
use log::*;
use std::sync::Arc;
use std::time::Instant;

mod example_scenes;

#[derive(Debug)]
struct Args {
    width: usize,
    height: usize,
    scene: String,
    output: String,
    fresnel: bool,
    config: RenderConfig,
}

fn parse_num<T: std::str::FromStr>(matches: &getopts::Matches, name: &str, default: T) -> Result<T> {
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("--{}: cannot parse {:?}", name, s))),
        None => Ok(default),
    }
}

fn usage(program: &str, opts: &Options) -> String {
    let brief = format!(
        "Usage: {} [options]\nScenes: {}",
        program,
        example_scenes::names().join(", ")
    );
    opts.usage(&brief)
}

fn parse_args(program: &str, argv: &[String]) -> Result<Option<Args>> {
    let mut opts = Options::new();
    opts.optopt("W", "width", "canvas width in pixels (default 400)", "PX");
    opts.optopt("H", "height", "canvas height in pixels (default 200)", "PX");
    opts.optopt("s", "scene", "scene to render (default spheres)", "NAME");
    opts.optopt("o", "output", "output PPM file (default output/output.ppm)", "FILE");
    opts.optopt("j", "threads", "number of render threads", "N");
    opts.optopt("d", "depth", "reflection/refraction depth (default 5)", "N");
    opts.optflag("", "fresnel", "blend reflection and refraction with Schlick");
    opts.optflag("h", "help", "print this help");

    let matches = opts
        .parse(argv)
        .map_err(|e| Error::InvalidArgument(e.to_string()))?;
    if matches.opt_present("h") {
        print!("{}", usage(program, &opts));
        return Ok(None);
    }

    let default = RenderConfig::default();
    let args = Args {
        width: parse_num(&matches, "width", 400)?,
        height: parse_num(&matches, "height", 200)?,
        scene: matches.opt_str("scene").unwrap_or_else(|| "spheres".to_owned()),
        output: matches
            .opt_str("output")
            .unwrap_or_else(|| "output/output.ppm".to_owned()),
        fresnel: matches.opt_present("fresnel"),
        config: RenderConfig {
            nthread: parse_num(&matches, "threads", default.nthread)?,
            depth: parse_num(&matches, "depth", default.depth)?,
        },
    };
    if args.width == 0 || args.height == 0 {
        return Err(Error::InvalidArgument(
            "width and height must be positive".to_owned(),
        ));
    }
    Ok(Some(args))
}

fn run(args: Args) -> Result<()> {
    let make = example_scenes::by_name(&args.scene)
        .ok_or_else(|| Error::InvalidArgument(format!("unknown scene {:?}", args.scene)))?;
    let (camera, mut world) = make(args.width, args.height)?;
    world.set_fresnel(args.fresnel);
    info!("scene {}: {} objects", args.scene, world.objects().len());

    let start = Instant::now();
    let canvas = Renderer.render(Arc::new(world), &camera, args.config)?;
    info!("rendered in {}", format_elapsed(start.elapsed()));

    create_output_dir(&args.output)?;
    canvas.write_ppm(&args.output)?;
    info!("wrote {}", args.output);
    Ok(())
}

fn main() {
    env_logger::init();
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "glintrace".to_owned());

    let result = parse_args(&program, argv.get(1..).unwrap_or(&[])).and_then(|args| match args {
        Some(args) => run(args),
        None => Ok(()),
    });
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
