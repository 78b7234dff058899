//! Discrete editor actions, as triggered by toolbar buttons or shortcuts.

use std::fmt;
use std::str::FromStr;

/// An action applied to the designer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignerCommand {
    AddLine,
    AddCurve,
    BladeOn,
    BladeOff,
    PopInstruction,
    Import,
    Export,
}

impl DesignerCommand {
    /// Every command, in toolbar order.
    pub const ALL: [DesignerCommand; 7] = [
        DesignerCommand::AddLine,
        DesignerCommand::AddCurve,
        DesignerCommand::BladeOn,
        DesignerCommand::BladeOff,
        DesignerCommand::PopInstruction,
        DesignerCommand::Import,
        DesignerCommand::Export,
    ];

    /// Returns the button label.
    pub fn label(&self) -> &'static str {
        match self {
            DesignerCommand::AddLine => "Add Line",
            DesignerCommand::AddCurve => "Add Curve",
            DesignerCommand::BladeOn => "Blade On",
            DesignerCommand::BladeOff => "Blade Off",
            DesignerCommand::PopInstruction => "Remove Last",
            DesignerCommand::Import => "Import",
            DesignerCommand::Export => "Export",
        }
    }

    /// Whether the command reads or writes a file.
    pub fn is_file_command(&self) -> bool {
        matches!(self, DesignerCommand::Import | DesignerCommand::Export)
    }
}

impl fmt::Display for DesignerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DesignerCommand {
    type Err = String;

    /// Parses kebab-case names such as `add-line` or `pop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add-line" | "line" => Ok(DesignerCommand::AddLine),
            "add-curve" | "curve" => Ok(DesignerCommand::AddCurve),
            "blade-on" => Ok(DesignerCommand::BladeOn),
            "blade-off" => Ok(DesignerCommand::BladeOff),
            "pop" | "pop-instruction" | "remove-last" => Ok(DesignerCommand::PopInstruction),
            "import" => Ok(DesignerCommand::Import),
            "export" => Ok(DesignerCommand::Export),
            other => Err(format!("Unknown designer command: {}", other)),
        }
    }
}
