//! Interactive project wizard as a pure state machine
//!
//! `State::next` consumes one key and returns the following state; it never
//! touches the terminal. `run_wizard` drives it from any [`KeySource`], which
//! keeps the terminal code in `tui` and lets tests script the keys.

use crate::config::UserConfig;
use crate::error::{Result, ScaffoldError};
use crate::project::{validate_project_name, ProjectConfig, DEFAULT_PROJECT_NAME, MAX_PROJECT_NAME_LEN};
use crate::templates::{License, Registry};
use std::io;
use std::path::Path;

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Char(char),
    Backspace,
    Up,
    Down,
    Enter,
    Escape,
    Interrupt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChoice {
    pub name: String,
    pub description: String,
}

/// Options offered by the wizard, fixed for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    pub templates: Vec<TemplateChoice>,
    pub licenses: Vec<License>,
    pub default_license: License,
    pub default_git: bool,
}

impl Choices {
    /// Templates in listing order (category, then name) with the user's defaults
    pub fn new(registry: &Registry, user: &UserConfig) -> Self {
        let mut templates = registry.templates();
        templates.sort_by_key(|t| t.category);

        Self {
            templates: templates
                .into_iter()
                .map(|t| TemplateChoice {
                    name: t.name.to_string(),
                    description: t.description.to_string(),
                })
                .collect(),
            licenses: License::ALL.to_vec(),
            default_license: user.license(),
            default_git: user.auto_git,
        }
    }

    fn default_license_cursor(&self) -> usize {
        self.licenses
            .iter()
            .position(|l| *l == self.default_license)
            .unwrap_or(0)
    }
}

/// Wizard step; each variant carries the answers collected so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    ProjectName {
        input: String,
        error: Option<String>,
    },
    Template {
        project_name: String,
        cursor: usize,
    },
    Docker {
        project_name: String,
        template_name: String,
    },
    License {
        project_name: String,
        template_name: String,
        include_docker: bool,
        cursor: usize,
    },
    Git {
        project_name: String,
        template_name: String,
        include_docker: bool,
        license: License,
    },
    Done(ProjectConfig),
    Cancelled,
}

impl State {
    pub fn start() -> Self {
        State::ProjectName {
            input: String::new(),
            error: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Done(_) | State::Cancelled)
    }

    /// Apply one input
    pub fn next(self, input: Input, choices: &Choices) -> State {
        if self.is_terminal() {
            return self;
        }
        if matches!(input, Input::Escape | Input::Interrupt) {
            return State::Cancelled;
        }

        self.advance(input, choices)
    }

    fn advance(self, key: Input, choices: &Choices) -> State {
        match self {
            State::ProjectName { mut input, error } => match key {
                Input::Char(c) if accepts_name_char(c) => {
                    if input.chars().count() < MAX_PROJECT_NAME_LEN {
                        input.push(c);
                    }
                    State::ProjectName { input, error: None }
                }
                Input::Backspace => {
                    input.pop();
                    State::ProjectName { input, error: None }
                }
                Input::Enter => {
                    let candidate = if input.trim().is_empty() {
                        DEFAULT_PROJECT_NAME
                    } else {
                        input.as_str()
                    };
                    match validate_project_name(candidate) {
                        Ok(project_name) => State::Template {
                            project_name,
                            cursor: 0,
                        },
                        Err(e) => State::ProjectName {
                            error: Some(e.to_string()),
                            input,
                        },
                    }
                }
                _ => State::ProjectName { input, error },
            },

            State::Template {
                project_name,
                cursor,
            } => match key {
                Input::Up | Input::Char('k') => State::Template {
                    project_name,
                    cursor: cursor.saturating_sub(1),
                },
                Input::Down | Input::Char('j') => State::Template {
                    project_name,
                    cursor: step_down(cursor, choices.templates.len()),
                },
                Input::Enter => match choices.templates.get(cursor) {
                    Some(template) => State::Docker {
                        project_name,
                        template_name: template.name.clone(),
                    },
                    None => State::Template {
                        project_name,
                        cursor,
                    },
                },
                _ => State::Template {
                    project_name,
                    cursor,
                },
            },

            State::Docker {
                project_name,
                template_name,
            } => match yes_no(key, false) {
                Some(include_docker) => State::License {
                    project_name,
                    template_name,
                    include_docker,
                    cursor: choices.default_license_cursor(),
                },
                None => State::Docker {
                    project_name,
                    template_name,
                },
            },

            State::License {
                project_name,
                template_name,
                include_docker,
                cursor,
            } => match key {
                Input::Up | Input::Char('k') => State::License {
                    project_name,
                    template_name,
                    include_docker,
                    cursor: cursor.saturating_sub(1),
                },
                Input::Down | Input::Char('j') => State::License {
                    project_name,
                    template_name,
                    include_docker,
                    cursor: step_down(cursor, choices.licenses.len()),
                },
                Input::Enter => match choices.licenses.get(cursor) {
                    Some(license) => State::Git {
                        project_name,
                        template_name,
                        include_docker,
                        license: *license,
                    },
                    None => State::License {
                        project_name,
                        template_name,
                        include_docker,
                        cursor,
                    },
                },
                _ => State::License {
                    project_name,
                    template_name,
                    include_docker,
                    cursor,
                },
            },

            State::Git {
                project_name,
                template_name,
                include_docker,
                license,
            } => match yes_no(key, choices.default_git) {
                Some(init_git) => State::Done(ProjectConfig {
                    project_name,
                    template_name,
                    license,
                    include_docker,
                    init_git,
                }),
                None => State::Git {
                    project_name,
                    template_name,
                    include_docker,
                    license,
                },
            },

            terminal => terminal,
        }
    }
}

fn accepts_name_char(c: char) -> bool {
    !c.is_control() && c != '/' && c != '\\'
}

fn step_down(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len {
        cursor + 1
    } else {
        cursor
    }
}

/// y/n answer; Enter takes the default shown in the prompt
fn yes_no(key: Input, default: bool) -> Option<bool> {
    match key {
        Input::Char('y') | Input::Char('Y') => Some(true),
        Input::Char('n') | Input::Char('N') => Some(false),
        Input::Enter => Some(default),
        _ => None,
    }
}

/// How a rendered line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Question,
    Input,
    Selected,
    Option,
    Error,
    Success,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Screen contents for `state`
pub fn render(state: &State, choices: &Choices) -> Vec<Line> {
    let mut lines = vec![Line::new(LineKind::Title, "Project Scaffold"), Line::new(LineKind::Hint, "")];

    match state {
        State::ProjectName { input, error } => {
            lines.push(Line::new(LineKind::Question, "? What is the project name?"));
            if input.is_empty() {
                lines.push(Line::new(LineKind::Hint, format!("> {}", DEFAULT_PROJECT_NAME)));
            } else {
                lines.push(Line::new(LineKind::Input, format!("> {}", input)));
            }
            if let Some(error) = error {
                lines.push(Line::new(LineKind::Error, error.clone()));
            }
        }
        State::Template { cursor, .. } => {
            lines.push(Line::new(LineKind::Question, "? Select a template:"));
            for (i, template) in choices.templates.iter().enumerate() {
                let text = format!("{} - {}", template.name, template.description);
                lines.push(option_line(i == *cursor, text));
            }
        }
        State::Docker { .. } => {
            lines.push(Line::new(LineKind::Question, "? Include Dockerfile? (y/N)"));
        }
        State::License { cursor, .. } => {
            lines.push(Line::new(LineKind::Question, "? Which license would you like to use?"));
            for (i, license) in choices.licenses.iter().enumerate() {
                lines.push(option_line(i == *cursor, license.display_name()));
            }
        }
        State::Git { .. } => {
            let prompt = if choices.default_git {
                "? Initialize git repository? (Y/n)"
            } else {
                "? Initialize git repository? (y/N)"
            };
            lines.push(Line::new(LineKind::Question, prompt));
        }
        State::Done(_) => {
            lines.push(Line::new(LineKind::Success, "✓ Configuration complete!"));
        }
        State::Cancelled => {
            lines.push(Line::new(LineKind::Error, "Cancelled"));
        }
    }

    if !state.is_terminal() {
        lines.push(Line::new(LineKind::Hint, ""));
        lines.push(Line::new(LineKind::Hint, "(Press Esc or Ctrl+C to cancel)"));
    }
    lines
}

fn option_line(selected: bool, text: impl Into<String>) -> Line {
    let text = text.into();
    if selected {
        Line::new(LineKind::Selected, format!("▸ {}", text))
    } else {
        Line::new(LineKind::Option, format!("  {}", text))
    }
}

/// Where the wizard reads keys from and draws to
pub trait KeySource {
    fn read_input(&mut self) -> io::Result<Input>;

    /// Replace whatever the previous call drew
    fn draw(&mut self, lines: &[Line]) -> io::Result<()>;
}

/// Run the wizard until it completes or is cancelled
///
/// An interrupted read counts as Ctrl+C.
pub fn run_wizard(source: &mut impl KeySource, choices: &Choices) -> Result<ProjectConfig> {
    let mut state = State::start();

    loop {
        source
            .draw(&render(&state, choices))
            .map_err(terminal_error)?;

        match state {
            State::Done(config) => return Ok(config),
            State::Cancelled => return Err(ScaffoldError::Cancelled),
            _ => {}
        }

        let input = match source.read_input() {
            Ok(input) => input,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Input::Interrupt,
            Err(e) => return Err(terminal_error(e)),
        };
        state = state.next(input, choices);
    }
}

fn terminal_error(e: io::Error) -> ScaffoldError {
    ScaffoldError::io("use", Path::new("terminal"), e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn choices() -> Choices {
        Choices::new(&Registry::builtin(), &UserConfig::default())
    }

    fn feed(state: State, inputs: &[Input], choices: &Choices) -> State {
        inputs
            .iter()
            .fold(state, |state, input| state.next(*input, choices))
    }

    fn type_str(s: &str) -> Vec<Input> {
        s.chars().map(Input::Char).collect()
    }

    fn all_non_terminal(choices: &Choices) -> Vec<State> {
        let mut states = vec![State::start()];
        let mut state = State::start();
        for input in [Input::Enter; 4] {
            state = state.next(input, choices);
            states.push(state.clone());
        }
        states
    }

    #[test]
    fn test_choices_follow_listing_order() {
        let choices = choices();
        assert_eq!(choices.templates.len(), 30);
        assert_eq!(choices.templates[0].name, "go-api");
        assert_eq!(choices.templates[16].name, "fullstack");
        assert_eq!(choices.templates[17].name, "learn-concurrency");
        assert_eq!(choices.templates[26].name, "challenge-30days");
        assert_eq!(choices.templates[29].name, "refactoring-exercise");
        assert_eq!(choices.default_license, License::Mit);
        assert!(choices.default_git);
    }

    #[test]
    fn test_happy_path() {
        let choices = choices();
        let mut inputs = type_str("billing");
        inputs.extend([
            Input::Enter,
            Input::Down,
            Input::Enter,
            Input::Char('y'),
            Input::Down,
            Input::Enter,
            Input::Char('n'),
        ]);

        let state = feed(State::start(), &inputs, &choices);
        assert_eq!(
            state,
            State::Done(ProjectConfig {
                project_name: "billing".to_string(),
                template_name: choices.templates[1].name.clone(),
                license: License::Apache2,
                include_docker: true,
                init_git: false,
            })
        );
    }

    #[test]
    fn test_defaults_with_enter_only() {
        let choices = choices();
        let state = feed(State::start(), &[Input::Enter; 5], &choices);
        assert_eq!(
            state,
            State::Done(ProjectConfig {
                project_name: "my-project".to_string(),
                template_name: "go-api".to_string(),
                license: License::Mit,
                include_docker: false,
                init_git: true,
            })
        );
    }

    #[test]
    fn test_defaults_follow_user_config() {
        let user = UserConfig {
            default_license: "GPL 3.0".to_string(),
            auto_git: false,
            ..Default::default()
        };
        let choices = Choices::new(&Registry::builtin(), &user);
        let state = feed(State::start(), &[Input::Enter; 5], &choices);
        match state {
            State::Done(config) => {
                assert_eq!(config.license, License::Gpl3);
                assert!(!config.init_git);
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_name_editing() {
        let choices = choices();
        let mut inputs = type_str("ab/c\\d");
        inputs.push(Input::Backspace);
        inputs.push(Input::Up);
        let state = feed(State::start(), &inputs, &choices);
        assert_eq!(
            state,
            State::ProjectName {
                input: "abc".to_string(),
                error: None
            }
        );

        // Backspace on empty input is harmless
        let state = State::start().next(Input::Backspace, &choices);
        assert_eq!(state, State::start());
    }

    #[test]
    fn test_name_length_capped() {
        let choices = choices();
        let long = "x".repeat(MAX_PROJECT_NAME_LEN + 10);
        let state = feed(State::start(), &type_str(&long), &choices);
        match state {
            State::ProjectName { input, .. } => assert_eq!(input.len(), MAX_PROJECT_NAME_LEN),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_invalid_name_stays_on_step() {
        let choices = choices();
        let mut inputs = type_str("..");
        inputs.push(Input::Enter);
        let state = feed(State::start(), &inputs, &choices);
        match &state {
            State::ProjectName { input, error } => {
                assert_eq!(input, "..");
                assert!(error.is_some());
            }
            other => panic!("unexpected state {:?}", other),
        }

        // Typing clears the error
        match state.next(Input::Char('x'), &choices) {
            State::ProjectName { error, .. } => assert!(error.is_none()),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_template_cursor_bounds() {
        let choices = choices();
        let start = State::Template {
            project_name: "p".to_string(),
            cursor: 0,
        };

        let state = start.clone().next(Input::Up, &choices);
        assert_eq!(state, start);
        let state = start.clone().next(Input::Char('k'), &choices);
        assert_eq!(state, start);

        let downs = vec![Input::Char('j'); choices.templates.len() + 5];
        match feed(start, &downs, &choices) {
            State::Template { cursor, .. } => assert_eq!(cursor, choices.templates.len() - 1),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_license_cursor_bounds() {
        let choices = choices();
        let start = State::License {
            project_name: "p".to_string(),
            template_name: "go-api".to_string(),
            include_docker: false,
            cursor: 0,
        };
        let state = feed(start, &[Input::Down; 10], &choices);
        match state.next(Input::Enter, &choices) {
            State::Git { license, .. } => assert_eq!(license, License::None),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_yes_no_ignores_other_keys() {
        let choices = choices();
        let docker = State::Docker {
            project_name: "p".to_string(),
            template_name: "go-api".to_string(),
        };
        for input in [Input::Char('x'), Input::Up, Input::Down, Input::Backspace] {
            assert_eq!(docker.clone().next(input, &choices), docker);
        }
        match docker.next(Input::Char('Y'), &choices) {
            State::License { include_docker, .. } => assert!(include_docker),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_cancel_from_every_state() {
        let choices = choices();
        let states = all_non_terminal(&choices);
        assert_eq!(states.len(), 5);

        for state in states {
            assert!(!state.is_terminal());
            assert_eq!(state.clone().next(Input::Escape, &choices), State::Cancelled);
            assert_eq!(state.next(Input::Interrupt, &choices), State::Cancelled);
        }
    }

    #[test]
    fn test_terminal_states_absorb_input() {
        let choices = choices();
        let done = feed(State::start(), &[Input::Enter; 5], &choices);
        assert!(done.is_terminal());

        for input in [Input::Enter, Input::Escape, Input::Char('y'), Input::Interrupt] {
            assert_eq!(done.clone().next(input, &choices), done);
            assert_eq!(State::Cancelled.next(input, &choices), State::Cancelled);
        }
    }

    #[test]
    fn test_render_marks_cursor() {
        let choices = choices();
        let state = State::License {
            project_name: "p".to_string(),
            template_name: "go-api".to_string(),
            include_docker: false,
            cursor: 1,
        };
        let lines = render(&state, &choices);
        let selected: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].text, "▸ Apache 2.0");
    }

    struct ScriptedKeys {
        inputs: VecDeque<io::Result<Input>>,
        frames: usize,
    }

    impl ScriptedKeys {
        fn new(inputs: Vec<io::Result<Input>>) -> Self {
            Self {
                inputs: inputs.into(),
                frames: 0,
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn read_input(&mut self) -> io::Result<Input> {
            self.inputs
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys")))
        }

        fn draw(&mut self, _lines: &[Line]) -> io::Result<()> {
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_run_wizard_completes() {
        let choices = choices();
        let mut inputs = vec![Ok(Input::Char('a'))];
        inputs.extend((0..5).map(|_| Ok(Input::Enter)));
        let mut keys = ScriptedKeys::new(inputs);
        let config = run_wizard(&mut keys, &choices).unwrap();
        assert_eq!(config.project_name, "a");
        assert_eq!(keys.frames, 7);
    }

    #[test]
    fn test_run_wizard_cancel() {
        let choices = choices();
        let mut keys = ScriptedKeys::new(vec![Ok(Input::Enter), Ok(Input::Escape)]);
        let err = run_wizard(&mut keys, &choices).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_run_wizard_interrupted_read_cancels() {
        let choices = choices();
        let mut keys = ScriptedKeys::new(vec![Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "ctrl-c",
        ))]);
        assert!(run_wizard(&mut keys, &choices).unwrap_err().is_cancelled());
    }

    #[test]
    fn test_run_wizard_terminal_failure() {
        let choices = choices();
        let mut keys = ScriptedKeys::new(Vec::new());
        let err = run_wizard(&mut keys, &choices).unwrap_err();
        assert!(!err.is_cancelled());
    }
}
