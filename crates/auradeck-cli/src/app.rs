//! Line-oriented driver over the wizard and the deck.
//!
//! Each input line is parsed into a [`Command`], applied to the engines, and
//! answered with lines of text. The driver is the presentation layer: it owns
//! the session and decides which engine sees which input.

use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;

use auradeck_deck::{
    CandidateSource, DecisionSink, DeckEngine, RecordingSink, SwipeDecision, SwipeDirection,
};
use auradeck_persona::{
    AuraColor, Candidate, Gender, Persona, PersonalityAxis, ToggleOutcome, MAX_LOOKING_FOR,
};
use auradeck_wizard::{
    DraftField, Navigation, Session, WizardEngine, WizardState, DESCRIPTION_WORD_HINT,
};
use tracing::{debug, warn};

use crate::backend::InMemoryBackend;
use crate::config::AppConfig;
use crate::error::Result;

pub const HELP: &str = "\
login <token>            sign in with an identity-provider token
name|age|gender|bio|music|aura|desc|flags <value>
slider <axis> [value]    axes: social_battery texting_style planning_style humor
tag <tag>                toggle a looking-for tag
answer <n> <text>        answer prompt n (1-based)
next | back | submit     wizard navigation
drag <dx> | like | nope  swipe the front card (needs a session)
reset | deck | status | offline | online | logout | help | quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login(String),
    Field(DraftField),
    Slider { axis: PersonalityAxis, value: Option<i32> },
    Tag(String),
    Next,
    Back,
    Submit,
    Drag(f64),
    Decide(SwipeDirection),
    Reset,
    Deck,
    Status,
    Online(bool),
    Logout,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let text = || rest.to_string();

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "login" if !rest.is_empty() => Self::Login(text()),
            "name" => Self::Field(DraftField::Username(text())),
            "age" => Self::Field(DraftField::Age(
                rest.parse().map_err(|_| format!("not an age: {rest:?}"))?,
            )),
            "gender" => Self::Field(DraftField::Gender(
                rest.parse::<Gender>().map_err(|e| e.to_string())?,
            )),
            "bio" => Self::Field(DraftField::BioEmojis(text())),
            "music" => Self::Field(DraftField::MusicTaste(text())),
            "aura" => Self::Field(DraftField::AuraColor(
                rest.parse::<AuraColor>().map_err(|e| e.to_string())?,
            )),
            "desc" => Self::Field(DraftField::Description(text())),
            "flags" => Self::Field(DraftField::RedFlags(text())),
            "slider" => {
                let mut parts = rest.split_whitespace();
                let axis = parts
                    .next()
                    .ok_or("slider needs an axis")?
                    .parse::<PersonalityAxis>()
                    .map_err(|e| e.to_string())?;
                // Unparseable scores keep the current value.
                let value = parts.next().and_then(|v| v.parse().ok());
                Self::Slider { axis, value }
            }
            "tag" if !rest.is_empty() => Self::Tag(text()),
            "answer" => {
                let (n, answer) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let n = n
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| format!("not a prompt number: {n:?}"))?;
                Self::Field(DraftField::PromptAnswer {
                    index: n - 1,
                    answer: answer.trim().to_string(),
                })
            }
            "next" => Self::Next,
            "back" => Self::Back,
            "submit" => Self::Submit,
            "drag" => Self::Drag(rest.parse().map_err(|_| format!("not a distance: {rest:?}"))?),
            "like" | "right" => Self::Decide(SwipeDirection::Right),
            "nope" | "left" => Self::Decide(SwipeDirection::Left),
            "reset" => Self::Reset,
            "deck" => Self::Deck,
            "status" => Self::Status,
            "offline" => Self::Online(false),
            "online" => Self::Online(true),
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(format!("unknown command: {line:?} (try 'help')")),
        };
        Ok(cmd)
    }
}

impl Command {
    /// Deck commands are only reachable with an active session.
    pub fn needs_session(&self) -> bool {
        matches!(self, Self::Drag(_) | Self::Decide(_) | Self::Reset | Self::Deck)
    }
}

/// Output of one command.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            quit: false,
        }
    }

    fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// The client: one session, one wizard, one deck.
pub struct App {
    config: AppConfig,
    session: Session,
    wizard: WizardEngine,
    deck: DeckEngine,
    sink: RecordingSink,
    backend: Arc<InMemoryBackend>,
}

impl App {
    /// Build a client and load the deck from `source`.
    pub async fn new<S>(config: AppConfig, source: &S, backend: Arc<InMemoryBackend>) -> Result<Self>
    where
        S: CandidateSource + ?Sized,
    {
        let deck = DeckEngine::load(source, config.deck).await?;
        Ok(Self {
            wizard: WizardEngine::new(config.wizard),
            config,
            session: Session::new(),
            deck,
            sink: RecordingSink::new(),
            backend,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn wizard(&self) -> &WizardEngine {
        &self.wizard
    }

    pub fn deck(&self) -> &DeckEngine {
        &self.deck
    }

    pub fn decisions(&self) -> Vec<SwipeDecision> {
        self.sink.decisions()
    }

    /// Parse and run one input line.
    pub async fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::default();
        }
        match line.parse::<Command>() {
            Ok(cmd) => self.execute(cmd).await,
            Err(msg) => Reply::line(msg),
        }
    }

    pub async fn execute(&mut self, cmd: Command) -> Reply {
        debug!(?cmd, "Command");
        if cmd.needs_session() && !self.session.has_valid_session() {
            return Reply::line("Sign in first");
        }
        match cmd {
            Command::Login(token) => self.login(&token).await,
            Command::Field(field) => {
                let step = field.step();
                if self.wizard.set_field(field) {
                    Reply::line(format!("{step} updated"))
                } else {
                    Reply::line("Nothing to update")
                }
            }
            Command::Slider { axis, value } => match self.wizard.set_slider_value(axis, value) {
                Some(score) => {
                    let (low, high) = axis.poles();
                    Reply::line(format!("{}: {score}/10 ({low} .. {high})", axis.label()))
                }
                None => Reply::line("Wizard is locked"),
            },
            Command::Tag(tag) => {
                let message = match self.wizard.toggle_looking_for(&tag) {
                    ToggleOutcome::Added => format!("+ {tag}"),
                    ToggleOutcome::Removed => format!("- {tag}"),
                    ToggleOutcome::Ignored => format!("Pick at most {MAX_LOOKING_FOR}"),
                };
                Reply::line(message)
            }
            Command::Next => {
                let nav = self.wizard.go_next();
                self.navigation(nav)
            }
            Command::Back => {
                let nav = self.wizard.go_back();
                self.navigation(nav)
            }
            Command::Submit => self.submit().await,
            Command::Drag(dx) => {
                self.deck.begin_gesture((0.0, 0.0));
                self.deck.update_gesture((dx, 0.0));
                let visual = self.deck.front_visual();
                let mut reply = Reply::default();
                if let Some(indicator) = visual.indicator {
                    reply.push(format!(
                        "[{}] {:.0}% rotated {:.1}deg",
                        indicator.label(),
                        visual.indicator_strength * 100.0,
                        visual.rotation_deg
                    ));
                }
                let decision = self.deck.end_gesture();
                reply.lines.extend(self.after_decision(decision).lines);
                reply
            }
            Command::Decide(direction) => {
                let decision = self.deck.decide(direction);
                self.after_decision(decision)
            }
            Command::Reset => {
                self.deck.reset();
                Reply::line(format!("Deck reset: {} candidates", self.deck.len()))
            }
            Command::Deck => self.render_deck(),
            Command::Status => self.status(),
            Command::Online(online) => {
                self.backend.set_online(online);
                Reply::line(if online { "Backend online" } else { "Backend offline" })
            }
            Command::Logout => {
                self.session.logout();
                self.wizard = WizardEngine::new(self.config.wizard);
                Reply::line("Logged out")
            }
            Command::Help => Reply::line(HELP),
            Command::Quit => Reply {
                lines: vec!["Bye".to_string()],
                quit: true,
            },
        }
    }

    fn navigation(&self, nav: Navigation) -> Reply {
        match nav {
            Navigation::Moved | Navigation::AtBoundary => self.render_step(),
            Navigation::Blocked(issues) => Reply {
                lines: issues.iter().map(|i| format!("! {i}")).collect(),
                quit: false,
            },
        }
    }

    async fn login(&mut self, token: &str) -> Reply {
        match self.backend.login(token).await {
            Ok(outcome) => {
                self.session.apply_login(outcome);
                if self.session.has_valid_session() {
                    Reply::line("Welcome back")
                } else {
                    self.wizard = WizardEngine::new(self.config.wizard);
                    let mut reply = Reply::line("New here: let's build your persona");
                    reply.lines.extend(self.render_step().lines);
                    reply
                }
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                Reply::line(e.user_message())
            }
        }
    }

    async fn submit(&mut self) -> Reply {
        let backend = Arc::clone(&self.backend);
        match self.wizard.submit(&mut self.session, backend.as_ref()).await {
            Ok(receipt) => {
                let mut reply = Reply::line(format!("Profile created ({})", receipt.user_id));
                reply.lines.extend(render_persona(&receipt.persona));
                reply
            }
            Err(e) => {
                let mut reply = Reply::line(e.user_message());
                if e.is_retryable() {
                    reply.push("Your answers are kept. Type 'submit' to try again.");
                }
                reply
            }
        }
    }

    fn after_decision(&mut self, decision: Option<SwipeDecision>) -> Reply {
        match decision {
            Some(d) => {
                self.sink.record(&d);
                let mut reply = Reply::line(format!("{} #{}", d.outcome, d.candidate_id));
                match self.deck.front() {
                    Some(next) => reply.push(format!("Next up: {}", next.name())),
                    None => reply.push("No more souls nearby. Type 'reset' to start over."),
                }
                reply
            }
            None if self.deck.is_empty() => Reply::line("Deck is empty"),
            None => Reply::line("Snapped back"),
        }
    }

    fn render_step(&self) -> Reply {
        match self.wizard.state() {
            WizardState::Step(i) => {
                let bar: String = self
                    .wizard
                    .progress()
                    .iter()
                    .map(|p| if p.reached { '#' } else { '-' })
                    .collect();
                let title = self.wizard.current_step().map_or("", |s| s.title());
                Reply::line(format!("[{bar}] Step {i}/{}: {title}", self.wizard.cursor().len()))
            }
            WizardState::Submitting => Reply::line("Saving your profile..."),
            WizardState::Completed => Reply::line("Profile complete"),
        }
    }

    fn render_deck(&self) -> Reply {
        let stack = self.deck.visible_stack();
        if stack.is_empty() {
            return Reply::line("Deck is empty");
        }
        let mut reply = Reply::default();
        for layer in stack {
            let marker = if layer.interactive { '>' } else { ' ' };
            reply.push(format!(
                "{marker} {} (scale {:.2}, +{:.0}px)",
                layer.candidate.name(),
                layer.scale,
                layer.y_offset
            ));
        }
        if let Some(front) = self.deck.front() {
            reply.lines.extend(render_candidate(front));
        }
        reply
    }

    fn status(&self) -> Reply {
        let mut reply = Reply::line(format!("Session: {}", self.session.state()));
        reply.push(format!("Wizard: {}", self.wizard.state()));
        if let Some(draft) = self.wizard.draft() {
            reply.push(format!(
                "Description: {}/{DESCRIPTION_WORD_HINT} words",
                draft.description_word_count()
            ));
        }
        if let Some(e) = self.wizard.last_error() {
            reply.push(format!("Last error: {}", e.user_message()));
        }
        reply.push(format!(
            "Deck: {} left, {} decided, {} liked",
            self.deck.len(),
            self.deck.decided_count(),
            self.sink.accepted().len()
        ));
        reply
    }
}

fn render_candidate(candidate: &Candidate) -> Vec<String> {
    render_persona(&candidate.persona)
}

fn render_persona(p: &Persona) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}, {} [{}]",
        p.headline_emoji(),
        p.username,
        p.age_label(),
        p.aura_color
    )];
    let mut sliders = String::new();
    for (axis, score) in p.sliders.iter() {
        let _ = write!(sliders, "{}={score} ", axis.key());
    }
    lines.push(sliders.trim_end().to_string());
    lines.push(format!("Music: {}", p.music_taste));
    if !p.looking_for.is_empty() {
        lines.push(format!("Looking for: {}", p.looking_for.iter().collect::<Vec<_>>().join(", ")));
    }
    for prompt in p.prompts.iter().filter(|q| q.is_answered()) {
        lines.push(format!("{} {}", prompt.question, prompt.answer));
    }
    if let Some(flags) = &p.red_flags {
        lines.push(format!("Red flags: {flags}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use auradeck_deck::FixtureSource;
    use auradeck_persona::CandidateId;

    async fn app() -> App {
        App::new(
            AppConfig::default(),
            &FixtureSource::bundled(),
            Arc::new(InMemoryBackend::new()),
        )
        .await
        .unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!("next".parse::<Command>().unwrap(), Command::Next);
        assert_eq!(
            "slider humor 12".parse::<Command>().unwrap(),
            Command::Slider { axis: PersonalityAxis::Humor, value: Some(12) }
        );
        assert_eq!(
            "slider humor".parse::<Command>().unwrap(),
            Command::Slider { axis: PersonalityAxis::Humor, value: None }
        );
        assert_eq!(
            "answer 2 Vinyl sounds better".parse::<Command>().unwrap(),
            Command::Field(DraftField::PromptAnswer { index: 1, answer: "Vinyl sounds better".into() })
        );
        assert_eq!("drag -150".parse::<Command>().unwrap(), Command::Drag(-150.0));
        assert!("answer 0 Tabs".parse::<Command>().is_err());
        assert!("aura purple".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    /// An app whose session is active after a completed signup.
    async fn signed_in_app() -> App {
        let mut app = app().await;
        app.handle_line("login g-deck").await;
        for _ in 0..3 {
            app.handle_line("next").await;
        }
        app.handle_line("submit").await;
        assert!(app.session().has_valid_session());
        app
    }

    #[tokio::test]
    async fn deck_needs_a_session() {
        let mut app = app().await;
        for line in ["drag 150", "like", "reset", "deck"] {
            assert_eq!(app.handle_line(line).await.lines, ["Sign in first"], "{line}");
        }
        assert_eq!(app.deck().len(), 3);
        assert!(app.decisions().is_empty());

        app.handle_line("login g-anon").await;
        app.handle_line("drag 150").await;
        assert_eq!(app.deck().len(), 3);
    }

    #[tokio::test]
    async fn swipe_through_deck() {
        let mut app = signed_in_app().await;
        let reply = app.handle_line("drag 150").await;
        assert!(reply.lines.iter().any(|l| l.starts_with("[LIKE]")));
        app.handle_line("nope").await;
        app.handle_line("drag 40").await;
        assert_eq!(app.deck().len(), 1);
        assert_eq!(
            app.decisions(),
            [SwipeDecision::accept(CandidateId::new("1")), SwipeDecision::reject(CandidateId::new("2"))]
        );
        app.handle_line("reset").await;
        assert_eq!(app.deck().len(), 3);
    }

    #[tokio::test]
    async fn onboarding_round_trip() {
        let mut app = app().await;
        app.handle_line("login g-123").await;
        assert!(app.session().provisional_credential().is_some());

        for line in ["name NeonGhost", "tag Friends", "next", "slider humor 9", "next", "next"] {
            app.handle_line(line).await;
        }
        assert_eq!(app.wizard().state(), WizardState::Step(4));

        let reply = app.handle_line("submit").await;
        assert!(reply.lines[0].starts_with("Profile created"));
        assert!(app.session().has_valid_session());
        assert_eq!(app.wizard().state(), WizardState::Completed);

        app.handle_line("logout").await;
        let reply = app.handle_line("login g-123").await;
        assert_eq!(reply.lines, ["Welcome back"]);
    }

    #[tokio::test]
    async fn offline_submit_keeps_draft() {
        let mut app = app().await;
        app.handle_line("login g-9").await;
        app.handle_line("name Ada").await;
        for _ in 0..3 {
            app.handle_line("next").await;
        }
        app.handle_line("offline").await;
        let reply = app.handle_line("submit").await;
        assert!(reply.lines[0].contains("Can't reach the server"));
        assert!(reply.lines[1].contains("Type 'submit'"));
        assert_eq!(app.wizard().draft().map(|d| d.username.as_str()), Some("Ada"));

        app.handle_line("online").await;
        let reply = app.handle_line("submit").await;
        assert!(reply.lines[0].starts_with("Profile created"));
    }

    #[tokio::test]
    async fn quit_sets_flag() {
        let mut app = app().await;
        assert!(app.handle_line("quit").await.quit);
        assert!(!app.handle_line("").await.quit);
    }
}
