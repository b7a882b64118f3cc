use std::{error::Error, fs, path::Path, path::PathBuf, sync::Mutex};

use log::{info, warn};
use pbr::ProgressBar;
use structopt::StructOpt;

use menger_rt::{
    parsing::{load_json, Scene, SceneData},
    Film, Rgb,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "menger_rt", about = "Ray traces a Menger sponge into a PNG")]
struct Opt {
    /// JSON scene description. The reference scene is used when omitted.
    #[structopt(short, long, parse(from_os_str))]
    scene: Option<PathBuf>,

    #[structopt(long)]
    width: Option<usize>,

    #[structopt(long)]
    height: Option<usize>,

    /// Horizontal field of view in degrees.
    #[structopt(long)]
    fov: Option<f64>,

    /// Sponge recursion depth.
    #[structopt(short, long)]
    depth: Option<u32>,

    /// Worker threads, defaults to the number of cpus.
    #[structopt(short = "j", long)]
    threads: Option<usize>,

    #[structopt(short, long, parse(from_os_str), default_value = "output/sponge.png")]
    output: PathBuf,
}

pub fn output_film(path: &Path, film: &Film<Rgb>) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let image = image::RgbImage::from_raw(film.width as u32, film.height as u32, film.to_rgb_bytes())
        .ok_or("film buffer does not match its dimensions")?;
    image.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;

    let mut data = match &opt.scene {
        Some(path) => load_json::<SceneData>(path)?,
        None => SceneData::default(),
    };
    if let Some(width) = opt.width {
        data.resolution[0] = width;
    }
    if let Some(height) = opt.height {
        data.resolution[1] = height;
    }
    if let Some(fov) = opt.fov {
        data.horizontal_fov = fov;
    }
    if let Some(depth) = opt.depth {
        data.set_depth(depth);
    }

    let renderer = Scene::try_from(data)?.into_renderer()?;
    info!("using {} threads", threads);

    let progress = Mutex::new(ProgressBar::new(renderer.height as u64));
    let (film, stats) = renderer.render_with_progress(&|_| {
        if let Ok(mut bar) = progress.lock() {
            bar.inc();
        }
    });
    if let Ok(mut bar) = progress.lock() {
        bar.finish();
    }
    if stats.errors > 0 {
        warn!("{} pixel(s) could not be shaded", stats.errors);
    }

    output_film(&opt.output, &film)?;
    info!("wrote {}", opt.output.display());
    Ok(())
}
