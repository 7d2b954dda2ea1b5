//! Toolpath assembly
//!
//! Walks the lofted cross-sections bottom to top and lays down, per layer,
//! the skin contour, the sparse infill, the rings and (on solid layers) the
//! scanline fill.

use crate::config::LoftConfig;
use crate::infill::{pattern_for, FillPattern};
use crate::loft::{CrossSection, LoftEngine, Station};
use crate::ring::RingGenerator;
use crate::solid_fill::SolidFill;
use tracing::{debug, info};
use wingloft_core::{LoftResult, Point3D, Step, ToolpathSequence};

pub struct LoftAssembler<'a> {
    config: &'a LoftConfig,
}

impl<'a> LoftAssembler<'a> {
    pub fn new(config: &'a LoftConfig) -> Self {
        Self { config }
    }

    /// Lofts `stations` and assembles every layer into one sequence.
    pub fn build(&self, stations: &[Station]) -> LoftResult<ToolpathSequence> {
        let sections = LoftEngine::new(self.config).build(stations)?;
        self.assemble(&sections)
    }

    /// Assembles already lofted sections, in the order given.
    pub fn assemble(&self, sections: &[CrossSection]) -> LoftResult<ToolpathSequence> {
        let infill: Option<Box<dyn FillPattern>> = self.config.infill.as_ref().map(|infill| {
            pattern_for(
                infill,
                self.config.solid_fill.as_ref(),
                self.config.layer_height,
            )
        });
        let solid = self
            .config
            .solid_fill
            .as_ref()
            .map(|s| (s, SolidFill::new(s.line_width, s.angle_deg)));

        let mut steps = Vec::new();
        let mut solid_layers = 0usize;
        for section in sections {
            let before = steps.len();
            let z = section.z;
            let is_solid = solid.as_ref().is_some_and(|(config, _)| config.contains(z));

            let start_x = section
                .contour
                .bounds()
                .map_or(0.0, |bounds| bounds.min_x);
            steps.push(Step::Travel(Point3D::new(
                start_x,
                0.0,
                z + self.config.layer_height,
            )));
            steps.extend(section.contour.iter().map(|p| Step::Geometry(p.with_z(z))));

            if let Some(pattern) = infill.as_ref().filter(|_| !is_solid) {
                steps.extend(pattern.fill(&section.contour, z)?);
            }

            steps.extend(RingGenerator::generate(&self.config.rings, z)?);

            if let Some((_, fill)) = solid.as_ref().filter(|_| is_solid) {
                steps.extend(fill.generate(&section.contour, z)?);
                solid_layers += 1;
            }

            debug!(
                span = section.span,
                layer = section.layer,
                z,
                chord = section.chord_length,
                steps = steps.len() - before,
                solid = is_solid,
                "Assembled layer"
            );
        }

        let toolpath = ToolpathSequence::new(steps);
        info!(
            layers = sections.len(),
            solid_layers,
            steps = toolpath.len(),
            travels = toolpath.travel_count(),
            extrusion_length = toolpath.extrusion_length(),
            "Toolpath assembled"
        );
        Ok(toolpath)
    }
}
