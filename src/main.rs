use anyhow::Context;
use std::path::PathBuf;
use tracing::info;
use wingloft::{init_logging, LoftAssembler, LogFormat, ProjectConfig, BUILD_DATE, VERSION};

const USAGE: &str = "usage: wingloft <project.toml|project.json> [toolpath.json]";

fn main() -> anyhow::Result<()> {
    init_logging(LogFormat::from_env())?;

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let project_path = args.next().context(USAGE)?;
    let output_path = args.next();

    info!(version = VERSION, built = BUILD_DATE, "WingLoft starting");

    let project = ProjectConfig::load_from_file(&project_path)
        .with_context(|| format!("loading {}", project_path.display()))?;
    let stations = project.resolve_stations()?;

    let toolpath = LoftAssembler::new(&project.loft)
        .build(&stations)?
        .translated(project.offset);

    if let Some(bounds) = toolpath.bounds() {
        info!(
            steps = toolpath.len(),
            geometry = toolpath.geometry_count(),
            travels = toolpath.travel_count(),
            extrusion_mm = toolpath.extrusion_length(),
            min = ?(bounds.min.x, bounds.min.y, bounds.min.z),
            max = ?(bounds.max.x, bounds.max.y, bounds.max.z),
            "Toolpath ready"
        );
    }

    if let Some(path) = output_path {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer(std::io::BufWriter::new(file), &toolpath)?;
        info!(path = %path.display(), "Wrote toolpath");
    }

    Ok(())
}
