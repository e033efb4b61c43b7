//! Prompt input handling - maps typed command lines to messages
//!
//! Arguments are split shell-style, so keys containing spaces can be quoted:
//! `mv . "old key" "new key"`.

use std::path::PathBuf;

use crate::messages::{AppMsg, Msg, TreeMsg, UiMsg};
use crate::model::{NodePath, ValueKind};

/// A prompt command definition, used for parsing and for `help`
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
}

/// Static registry of all prompt commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "open",
        usage: "open [PATH]",
        help: "Load a local file (no path: file dialog)",
    },
    CommandDef {
        name: "url",
        usage: "url ADDRESS",
        help: "Load YAML from an absolute URL",
    },
    CommandDef {
        name: "add",
        usage: "add [PATH] KIND",
        help: "Add a key to the object at PATH (string, number, boolean, object)",
    },
    CommandDef {
        name: "rm",
        usage: "rm [PATH] KEY",
        help: "Remove KEY from the object at PATH",
    },
    CommandDef {
        name: "mv",
        usage: "mv [PATH] OLD NEW",
        help: "Rename a key in the object at PATH",
    },
    CommandDef {
        name: "set",
        usage: "set PATH KEY VALUE",
        help: "Set a value (KEY is an index inside lists)",
    },
    CommandDef {
        name: "save",
        usage: "save",
        help: "Write <name>_edited.<ext> to the download directory",
    },
    CommandDef {
        name: "saveas",
        usage: "saveas",
        help: "Choose where to write the edited file",
    },
    CommandDef {
        name: "close",
        usage: "close",
        help: "Close the document",
    },
    CommandDef {
        name: "ok",
        usage: "ok",
        help: "Dismiss the error message",
    },
    CommandDef {
        name: "show",
        usage: "show",
        help: "Redraw the editor",
    },
    CommandDef {
        name: "help",
        usage: "help",
        help: "List commands",
    },
    CommandDef {
        name: "quit",
        usage: "quit",
        help: "Exit",
    },
];

/// What the runtime should do with one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Feed these messages through `update`
    Dispatch(Vec<Msg>),
    /// Redraw without changing state
    Show,
    /// Print the command list
    Help,
    /// Blank line
    Empty,
    /// Known command with the wrong arguments
    Usage(&'static str),
    /// Unknown command or unparseable line
    Unknown(String),
}

/// Help text listing all commands
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    COMMANDS
        .iter()
        .map(|c| format!("  {:width$}  {}\n", c.usage, c.help, width = width))
        .collect()
}

fn usage_of(name: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.usage)
        .unwrap_or("")
}

/// Parse one prompt line
pub fn parse_line(line: &str) -> InputAction {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => return InputAction::Unknown(format!("{}: {}", line.trim(), e)),
    };
    let Some((command, args)) = words.split_first() else {
        return InputAction::Empty;
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let msgs = match (command.as_str(), args.as_slice()) {
        ("open", []) => vec![Msg::App(AppMsg::OpenFileDialog)],
        ("open", [path]) => vec![Msg::App(AppMsg::OpenFile(PathBuf::from(*path)))],
        ("url", [address]) => vec![
            Msg::Ui(UiMsg::SetUrlInput(address.to_string())),
            Msg::App(AppMsg::LoadFromUrl),
        ],
        ("add", [kind]) => vec![add_msg(NodePath::root(), kind)],
        ("add", [path, kind]) => vec![add_msg(NodePath::parse(path), kind)],
        ("rm", [key]) => vec![Msg::remove_key(NodePath::root(), *key)],
        ("rm", [path, key]) => vec![Msg::remove_key(NodePath::parse(path), *key)],
        ("mv", [old, new]) => vec![Msg::rename_key(NodePath::root(), *old, *new)],
        ("mv", [path, old, new]) => vec![Msg::rename_key(NodePath::parse(path), *old, *new)],
        ("set", [path, key, value]) => vec![Msg::Tree(TreeMsg::SetValue {
            path: NodePath::parse(path),
            key: key.to_string(),
            input: value.to_string(),
        })],
        ("save", []) => vec![Msg::App(AppMsg::SaveFile)],
        ("saveas", []) => vec![Msg::App(AppMsg::SaveFileAs)],
        ("close", []) => vec![Msg::App(AppMsg::CloseForm)],
        ("ok" | "dismiss", []) => vec![Msg::Ui(UiMsg::DismissError)],
        ("quit" | "exit" | "q", []) => vec![Msg::App(AppMsg::Quit)],
        ("show" | "ls", []) => return InputAction::Show,
        ("help" | "?", []) => return InputAction::Help,
        (name, _) if COMMANDS.iter().any(|c| c.name == name) => {
            return InputAction::Usage(usage_of(name));
        }
        (name, _) => return InputAction::Unknown(name.to_string()),
    };
    InputAction::Dispatch(msgs)
}

/// Add-key message, or an error report if `kind` is not a known kind
fn add_msg(path: NodePath, kind: &str) -> Msg {
    match kind.parse::<ValueKind>() {
        Ok(kind) => Msg::add_key(path, kind),
        Err(e) => Msg::Ui(UiMsg::ReportError(e)),
    }
}
