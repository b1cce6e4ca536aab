use crate::animation::fade::{FadeWindow, SectionPhase};
use crate::foundation::core::Progress;
use crate::foundation::error::{TimelineError, TimelineResult};

/// One named content block and its visibility schedule.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionSpec {
    /// Unique section name (`hero`, `logos`, ...).
    pub name: String,
    /// Canonical fade window.
    pub window: FadeWindow,
    /// Vertical lift in pixels applied while faded: `lift_px * (1 - opacity)`.
    pub lift_px: f64,
}

impl SectionSpec {
    /// Section without lift.
    pub fn new(name: impl Into<String>, window: FadeWindow) -> Self {
        Self {
            name: name.into(),
            window,
            lift_px: 0.0,
        }
    }

    /// Set the faded lift distance.
    pub fn with_lift(mut self, lift_px: f64) -> Self {
        self.lift_px = lift_px;
        self
    }
}

/// Read-only table of sections in declaration (render) order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Schedule {
    sections: Vec<SectionSpec>,
}

impl Schedule {
    /// Start building a schedule.
    pub fn builder() -> ScheduleBuilder {
        ScheduleBuilder::default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no sections are configured.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SectionSpec> {
        self.sections.iter()
    }

    /// Look up a section by name.
    pub fn get(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Position of `name` in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    /// Window of `name`, or a schedule error naming the missing section.
    pub fn window(&self, name: &str) -> TimelineResult<&FadeWindow> {
        self.get(name)
            .map(|s| &s.window)
            .ok_or_else(|| TimelineError::schedule(format!("unknown section '{name}'")))
    }

    /// Opacity of `name` at `progress`.
    pub fn opacity(&self, name: &str, progress: Progress) -> TimelineResult<f64> {
        Ok(self.window(name)?.opacity(progress))
    }

    /// Phase of `name` at `progress`.
    pub fn phase(&self, name: &str, progress: Progress) -> TimelineResult<SectionPhase> {
        Ok(self.window(name)?.phase(progress))
    }
}

/// Collects sections and rejects duplicates on [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct ScheduleBuilder {
    sections: Vec<SectionSpec>,
}

impl ScheduleBuilder {
    /// Append a fully specified section.
    pub fn section(mut self, spec: SectionSpec) -> Self {
        self.sections.push(spec);
        self
    }

    /// Append a section with an explicit four-point window.
    pub fn window(
        self,
        name: impl Into<String>,
        points: [f64; 4],
    ) -> TimelineResult<Self> {
        let window = FadeWindow::new(points[0], points[1], points[2], points[3])?;
        Ok(self.section(SectionSpec::new(name, window)))
    }

    /// Append a section from the trigger shorthand.
    pub fn trigger(
        self,
        name: impl Into<String>,
        trigger: f64,
        visible: f64,
        fade: f64,
    ) -> TimelineResult<Self> {
        let window = FadeWindow::from_trigger(trigger, visible, fade)?;
        Ok(self.section(SectionSpec::new(name, window)))
    }

    /// Validate and freeze the table.
    pub fn build(self) -> TimelineResult<Schedule> {
        for (i, s) in self.sections.iter().enumerate() {
            if s.name.is_empty() {
                return Err(TimelineError::schedule("section name must not be empty"));
            }
            if !s.lift_px.is_finite() {
                return Err(TimelineError::schedule(format!(
                    "section '{}' lift_px must be finite",
                    s.name
                )));
            }
            if self.sections[..i].iter().any(|prev| prev.name == s.name) {
                return Err(TimelineError::schedule(format!(
                    "duplicate section '{}'",
                    s.name
                )));
            }
        }
        Ok(Schedule {
            sections: self.sections,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/model.rs"]
mod tests;
