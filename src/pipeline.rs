//! Pipeline – ties together presentation lookup, slide-order extraction,
//! slide collection, document assembly and PDF export.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collect::{collect_slides, read_lossy, CollectedSlides};
use crate::config::Config;
use crate::document::build_print_document;
use crate::error::GenerateError;
use crate::metadata::{extract_slide_order, SlideOrder};
use crate::render::{export_pdf, ExportReport, RenderOptions, RenderService};

/// Directory under the workspace root that holds every presentation.
pub const SLIDES_DIR: &str = "slides";

/// File-system locations of one presentation.
///
/// ```text
/// <root>/slides/<name>.html            host file with the slide order
/// <root>/slides/<name>/<category>/...  slide fragments
/// <root>/<name>.pdf                    output
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub name: String,
    pub slides_base: PathBuf,
    pub dir: PathBuf,
    pub metadata_path: PathBuf,
    pub output_path: PathBuf,
}

impl Presentation {
    /// Paths for `name` under `root`, without checking they exist.
    pub fn new(root: &Path, name: &str) -> Self {
        let slides_base = root.join(SLIDES_DIR);
        Self {
            name: name.to_string(),
            dir: slides_base.join(name),
            metadata_path: slides_base.join(format!("{name}.html")),
            output_path: root.join(format!("{name}.pdf")),
            slides_base,
        }
    }

    /// Like [`Presentation::new`], but the slide directory and the host file
    /// must both exist.
    pub fn locate(root: &Path, name: &str) -> Result<Self, GenerateError> {
        let presentation = Self::new(root, name);
        if !presentation.dir.is_dir() {
            return Err(GenerateError::PresentationNotFound {
                expected: presentation.dir,
                available: available_presentations(&presentation.slides_base),
            });
        }
        if !presentation.metadata_path.is_file() {
            return Err(GenerateError::MetadataNotFound {
                expected: presentation.metadata_path,
            });
        }
        Ok(presentation)
    }
}

/// Sorted names of the presentation directories under `slides_base`, or
/// `None` if `slides_base` cannot be listed.
pub fn available_presentations(slides_base: &Path) -> Option<Vec<String>> {
    let entries = fs::read_dir(slides_base).ok()?;
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort();
    Some(names)
}

/// Everything produced before rendering.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub order: SlideOrder,
    pub collected: CollectedSlides,
    pub document: String,
}

impl Assembly {
    pub fn slide_count(&self) -> usize {
        self.collected.slides.len()
    }

    pub fn category_count(&self) -> usize {
        self.order.category_count()
    }
}

/// Read the slide order, collect the slides and build the print document.
pub fn assemble(presentation: &Presentation, config: &Config) -> Result<Assembly, GenerateError> {
    let host = read_lossy(&presentation.metadata_path)?;
    let order = extract_slide_order(&host)?;
    log::info!(
        "Found {} categories: {}",
        order.category_count(),
        order.category_names().join(", ")
    );

    let collected = collect_slides(&presentation.dir, &order)?;
    log::info!("Total slides: {}", collected.slides.len());

    let document = build_print_document(&presentation.name, &collected.slides, config);
    Ok(Assembly {
        order,
        collected,
        document,
    })
}

/// What a dry run reports instead of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunSummary {
    pub presentation: String,
    pub slides: usize,
    pub categories: usize,
    pub missing: usize,
    pub brand_primary: String,
    pub brand_dark: String,
    pub slide_width: String,
    pub slide_height: String,
    pub timeout_ms: u64,
    pub renderer: String,
    pub output: PathBuf,
}

impl fmt::Display for DryRunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DRY RUN SUMMARY")?;
        writeln!(f, "═══════════════════════════════════════")?;
        writeln!(f, "Presentation:     {}", self.presentation)?;
        writeln!(f, "Total Slides:     {}", self.slides)?;
        writeln!(f, "Total Categories: {}", self.categories)?;
        writeln!(f, "Missing Slides:   {}", self.missing)?;
        writeln!(f, "Brand Primary:    {}", self.brand_primary)?;
        writeln!(f, "Brand Dark:       {}", self.brand_dark)?;
        writeln!(f, "Slide Size:       {} × {}", self.slide_width, self.slide_height)?;
        writeln!(f, "Highlight Wait:   {} ms", self.timeout_ms)?;
        writeln!(f, "Browser:          {}", self.renderer)?;
        write!(f, "Output would be:  {}", self.output.display())
    }
}

/// One invocation of the tool.
#[derive(Debug, Clone)]
pub struct Request {
    pub root: PathBuf,
    pub name: String,
    pub dry_run: bool,
    pub config: Config,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    DryRun(DryRunSummary),
    Exported { report: ExportReport, slides: usize },
}

/// Run the whole pipeline. A dry run stops after assembly and never touches
/// the disk.
pub fn run(request: &Request, renderer: &dyn RenderService) -> Result<Outcome, GenerateError> {
    let presentation = Presentation::locate(&request.root, &request.name)?;
    log::info!("Generating PDF for \"{}\"", presentation.name);

    let assembly = assemble(&presentation, &request.config)?;

    if request.dry_run {
        let config = &request.config;
        return Ok(Outcome::DryRun(DryRunSummary {
            presentation: presentation.name.clone(),
            slides: assembly.slide_count(),
            categories: assembly.category_count(),
            missing: assembly.collected.missing.len(),
            brand_primary: config.brand_primary.clone(),
            brand_dark: config.brand_dark.clone(),
            slide_width: config.slide_width.clone(),
            slide_height: config.slide_height.clone(),
            timeout_ms: config.timeout,
            renderer: renderer.describe(),
            output: presentation.output_path,
        }));
    }

    let options = RenderOptions::from_config(&request.config);
    let report = export_pdf(
        &assembly.document,
        &presentation.name,
        &presentation.slides_base,
        &presentation.output_path,
        &options,
        renderer,
    )?;
    Ok(Outcome::Exported {
        report,
        slides: assembly.slide_count(),
    })
}
