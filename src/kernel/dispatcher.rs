use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use super::context::{ContextKind, ContextStack, Transition};
use super::executor::{Executor, Plan, SideEffect};
use super::hints::HintProvider;
use super::intent::table::IntentTable;
use super::phrases::PhraseBank;
use super::telemetry::event::TelemetryEvent;
use super::telemetry::recorder::TelemetryRecorder;
use crate::config::DialogueConfig;
use crate::error::DispatchError;
use crate::inputs::recognizer::Recognizer;
use crate::outputs::indicator::Indicator;
use crate::outputs::speech::SpeechSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Recognizer heard nothing. No state changed.
    NothingHeard,
    /// No intent matched in the active context.
    Unmatched,
    Fired { intent: String },
    /// The terminal goodbye fired; the session is over.
    Ended,
}

/// Drives recognize -> match -> act -> transition cycles.
///
/// Owns the context stack and the external sinks. Turns run strictly one
/// after another; every sink call is awaited before the next begins.
pub struct Dispatcher<R, S, L> {
    pub config: DialogueConfig,
    pub session_id: Uuid,
    pub stack: ContextStack,
    pub intents: IntentTable,
    pub phrases: PhraseBank,
    pub hints: HintProvider,
    pub telemetry: TelemetryRecorder,
    executor: Executor,
    rng: StdRng,
    recognizer: R,
    speech: S,
    indicator: L,
    turns: u64,
}

impl<R, S, L> Dispatcher<R, S, L>
where
    R: Recognizer,
    S: SpeechSink,
    L: Indicator,
{
    /// Dispatcher with the stock intents, phrases and hints.
    pub fn new(config: DialogueConfig, recognizer: R, speech: S, indicator: L) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            session_id: Uuid::new_v4(),
            stack: ContextStack::new(),
            intents: IntentTable::standard(),
            phrases: PhraseBank::standard(),
            hints: HintProvider::standard(&config.language),
            telemetry: TelemetryRecorder::with_capacity(config.telemetry_capacity),
            executor: Executor::new(config.trivia_hint_after),
            rng,
            recognizer,
            speech,
            indicator,
            turns: 0,
            config,
        }
    }

    pub fn with_intents(mut self, intents: IntentTable) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_phrases(mut self, phrases: PhraseBank) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn with_hints(mut self, hints: HintProvider) -> Self {
        self.hints = hints;
        self
    }

    pub fn context(&self) -> ContextKind {
        self.stack.kind()
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn is_ended(&self) -> bool {
        self.stack.is_ended()
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    pub fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }

    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn indicator(&self) -> &L {
        &self.indicator
    }

    /// Hints the next recognizer call will receive.
    pub fn current_hints(&self) -> Vec<String> {
        self.hints.hints_for(self.stack.current())
    }

    /// Runs turns until the goodbye intent fires or a sink fails.
    pub async fn run(&mut self) -> Result<(), DispatchError> {
        info!(
            "Dialogue session {} started. Language: {}",
            self.session_id, self.config.language
        );
        loop {
            if self.turn().await? == TurnOutcome::Ended {
                break;
            }
        }
        info!("Dialogue session {} ended after {} turns", self.session_id, self.turns);
        Ok(())
    }

    /// One full cycle: hints, recognition, then `handle`.
    pub async fn turn(&mut self) -> Result<TurnOutcome, DispatchError> {
        if self.stack.is_ended() {
            return Ok(TurnOutcome::Ended);
        }

        // Re-queried every turn; providers may refresh hints mid-context.
        let hints = self.current_hints();
        if hints.is_empty() {
            info!("Say something.");
        } else {
            info!("Say something, e.g. {}.", hints.join(", "));
        }

        let heard = self
            .recognizer
            .recognize(&self.config.language, &hints)
            .await
            .map_err(DispatchError::Recognizer)?;

        match heard {
            Some(text) if !text.trim().is_empty() => {
                info!("You said: \"{}\"", text);
                self.handle(&text).await
            }
            _ => {
                info!("You said nothing.");
                self.turns += 1;
                self.telemetry.record(TelemetryEvent::NothingHeard {
                    context: self.stack.kind(),
                });
                Ok(TurnOutcome::NothingHeard)
            }
        }
    }

    /// Match and act on an already-recognized utterance.
    ///
    /// Either every effect of the matched intent succeeds and the counter and
    /// context change are committed, or a sink error is returned and the
    /// dialogue state is left as it was.
    pub async fn handle(&mut self, text: &str) -> Result<TurnOutcome, DispatchError> {
        if self.stack.is_ended() {
            return Ok(TurnOutcome::Ended);
        }
        self.turns += 1;

        let utterance = text.to_lowercase();
        let context = self.stack.kind();

        let plan = match self.intents.match_intent(context, &utterance) {
            Some(intent) => self.executor.resolve(
                intent,
                self.stack.current(),
                &utterance,
                &self.phrases,
                &mut self.rng,
            )?,
            None => {
                let counted = context.counts_misses();
                let frame = self.stack.current_mut();
                frame.turns += 1;
                if counted {
                    frame.attempts += 1;
                }
                debug!("No intent matched in {:?} (attempts: {})", context, frame.attempts);
                self.telemetry.record(TelemetryEvent::NoMatch { context, counted });
                return Ok(TurnOutcome::Unmatched);
            }
        };

        self.apply(&plan.effects).await?;
        Ok(self.commit(context, plan))
    }

    async fn apply(&mut self, effects: &[SideEffect]) -> Result<(), DispatchError> {
        for effect in effects {
            match effect {
                SideEffect::Speak { text, lang } => {
                    debug!("Speaking ({:?}): '{}'", lang, text);
                    self.speech
                        .say(text, lang.as_deref())
                        .await
                        .map_err(DispatchError::Speech)?;
                }
                SideEffect::SetLight(state) => {
                    debug!("Light -> {:?}", state);
                    self.indicator
                        .set_state(*state)
                        .await
                        .map_err(DispatchError::Indicator)?;
                }
            }
        }
        Ok(())
    }

    fn commit(&mut self, context: ContextKind, plan: Plan) -> TurnOutcome {
        let frame = self.stack.current_mut();
        frame.turns += 1;
        if let Some(attempts) = plan.attempts {
            frame.attempts = attempts;
        }

        self.telemetry.record(TelemetryEvent::IntentFired {
            context,
            intent: plan.intent.clone(),
        });

        if plan.transition == Transition::Stay {
            return TurnOutcome::Fired { intent: plan.intent };
        }

        let depth_before = self.stack.depth();
        let to = self.stack.apply(plan.transition);

        if self.stack.is_ended() {
            info!("'{}' ended the session in {:?}", plan.intent, context);
            self.telemetry
                .record(TelemetryEvent::SessionEnded { turns: self.turns });
            return TurnOutcome::Ended;
        }

        if to != context || self.stack.depth() != depth_before {
            info!("Context {:?} -> {:?} (depth {})", context, to, self.stack.depth());
            self.telemetry.record(TelemetryEvent::ContextTransition {
                from: context,
                to,
                depth: self.stack.depth(),
            });
        }

        TurnOutcome::Fired { intent: plan.intent }
    }
}
