use super::status::Status;
use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// A one-line widget listing the game controls, with those that do nothing
/// in the current status dimmed:
///
/// ```text
///  [Pause (p)] [Resume (space)] [Reset (r)] [Quit (q)]
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ControlBar {
    pub(crate) status: Status,
}

/// The buttons in the control bar
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Control {
    Pause,
    /// Also starts an idle game
    Resume,
    Reset,
    Quit,
}

impl Control {
    /// Can this control be used while the game is in `status`?
    pub(crate) fn enabled(self, status: Status) -> bool {
        match self {
            Control::Pause => status.can_pause(),
            Control::Resume => status.can_resume(),
            Control::Reset | Control::Quit => true,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Control::Pause => "Pause",
            Control::Resume => "Resume",
            Control::Reset => "Reset",
            Control::Quit => "Quit",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Control::Pause => "p",
            Control::Resume => "space",
            Control::Reset => "r",
            Control::Quit => "q",
        }
    }

    /// Render the control as spans for display in the control bar
    fn to_spans(self, enabled: bool) -> [Span<'static>; 3] {
        let (text_style, key_style) = if enabled {
            (Style::new(), consts::KEY_STYLE)
        } else {
            (consts::DISABLED_STYLE, consts::DISABLED_STYLE)
        };
        [
            Span::styled(format!("[{} (", self.label()), text_style),
            Span::styled(self.key(), key_style),
            Span::styled(")]", text_style),
        ]
    }
}

impl Widget for ControlBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut line = Line::default();
        for ctrl in Control::iter() {
            line.push_span(" ");
            for span in ctrl.to_spans(ctrl.enabled(self.status)) {
                line.push_span(span);
            }
        }
        line.render(area, buf);
    }
}
