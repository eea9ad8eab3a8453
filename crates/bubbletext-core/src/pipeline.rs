use std::fmt;

use tracing::{debug, trace};

use crate::bold::render_bold;
use crate::bullet::rewrite_bullets;
use crate::emphasis::rewrite_emphasis;
use crate::escape::escape_html;
use crate::markers::{collapse_markers, strip_stray};
use crate::normalize::normalize;

/// One step of the assistant-text pipeline.
///
/// Stages run strictly in the order of [`Stage::ALL`]. Every text-level
/// rewrite happens before [`Stage::Escape`], and [`Stage::RenderBold`] is the
/// only stage that introduces markup.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    Normalize,
    Emphasis,
    Bullets,
    CollapseMarkers,
    StripStray,
    Escape,
    RenderBold,
}

/// Stages that rewrite text without escaping it.
pub const TEXT_STAGES: &[Stage] = &[
    Stage::Normalize,
    Stage::Emphasis,
    Stage::Bullets,
    Stage::CollapseMarkers,
    Stage::StripStray,
];

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Normalize,
        Stage::Emphasis,
        Stage::Bullets,
        Stage::CollapseMarkers,
        Stage::StripStray,
        Stage::Escape,
        Stage::RenderBold,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Normalize => "normalize",
            Stage::Emphasis => "emphasis",
            Stage::Bullets => "bullets",
            Stage::CollapseMarkers => "collapse-markers",
            Stage::StripStray => "strip-stray",
            Stage::Escape => "escape",
            Stage::RenderBold => "render-bold",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Stage::Normalize => normalize(Some(text)),
            Stage::Emphasis => rewrite_emphasis(text),
            Stage::Bullets => rewrite_bullets(text),
            Stage::CollapseMarkers => collapse_markers(text),
            Stage::StripStray => strip_stray(text),
            Stage::Escape => escape_html(text),
            Stage::RenderBold => render_bold(text),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the text stages only, yielding canonical `**bold**` text that is
/// still unescaped.
pub fn format_assistant_text(raw: Option<&str>) -> String {
    run(raw, TEXT_STAGES, |_, _| {})
}

/// Converts untrusted assistant text into markup safe for inner HTML.
///
/// The result holds escaped text, line breaks and `<strong>` pairs, nothing
/// else.
pub fn format_for_display(raw: Option<&str>) -> String {
    run(raw, &Stage::ALL, |_, _| {})
}

/// Runs the whole pipeline and returns every stage's output in order.
pub fn trace_stages(raw: Option<&str>) -> Vec<(Stage, String)> {
    let mut outputs = Vec::with_capacity(Stage::ALL.len());
    run(raw, &Stage::ALL, |stage, text| {
        outputs.push((stage, text.to_owned()))
    });
    outputs
}

fn run(raw: Option<&str>, stages: &[Stage], mut observe: impl FnMut(Stage, &str)) -> String {
    // Absent input is only meaningful to the normalizer; every later stage
    // sees a string.
    let mut text = match raw {
        Some(text) => text.to_owned(),
        None => String::new(),
    };
    for &stage in stages {
        let next = stage.apply(&text);
        trace!(
            stage = stage.name(),
            input_len = text.len(),
            output_len = next.len(),
            "stage applied"
        );
        if next != text {
            debug!(stage = stage.name(), "stage rewrote text");
        }
        observe(stage, &next);
        text = next;
    }
    text
}
