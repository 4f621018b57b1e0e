use parley::inputs::ScriptedRecognizer;
use parley::kernel::context::ContextKind;
use parley::kernel::phrases::{Category, PhraseBank};
use parley::outputs::{LightState, Observation, RecordingIndicator, RecordingSpeech, Transcript};
use parley::{DialogueConfig, DispatchError, Dispatcher, TurnOutcome};

type TestDispatcher = Dispatcher<ScriptedRecognizer, RecordingSpeech, RecordingIndicator>;

fn dispatcher(script: &[&str]) -> (TestDispatcher, Transcript) {
    let transcript = Transcript::new();
    let d = Dispatcher::new(
        DialogueConfig::default().with_seed(7),
        ScriptedRecognizer::from_lines(script.iter().copied()),
        RecordingSpeech::new(transcript.clone()),
        RecordingIndicator::new(transcript.clone()),
    );
    (d, transcript)
}

fn line(category: Category) -> String {
    PhraseBank::standard().get(category).unwrap().replies()[0].text.clone()
}

#[tokio::test]
async fn test_end_to_end_light_and_repeat_mode() {
    let (mut d, transcript) = dispatcher(&[]);

    // 1. Light command stays at root
    let out = d.handle("Turn on the light").await.unwrap();
    assert_eq!(out, TurnOutcome::Fired { intent: "light_on".to_string() });
    assert_eq!(transcript.lights(), vec![LightState::On]);
    assert_eq!(d.context(), ContextKind::Root);

    // 2. Enter repeat mode; the rest of the utterance is not echoed
    d.handle("repeat after me see you later").await.unwrap();
    assert_eq!(d.context(), ContextKind::RepeatMode);
    assert_eq!(transcript.spoken(), vec!["Okay. Ready.".to_string()]);
    assert_eq!(
        d.current_hints(),
        vec!["i'm done".to_string(), "i am done".to_string()],
        "Repeat mode hints are the completion phrases"
    );

    // 3. Echo verbatim
    d.handle("see you later").await.unwrap();
    assert_eq!(transcript.spoken().last().unwrap(), "see you later");
    assert_eq!(d.context(), ContextKind::RepeatMode);

    // 4. Completion phrase returns to root
    d.handle("I am done").await.unwrap();
    assert_eq!(
        transcript.spoken().last().unwrap(),
        "Great. I hope that was fun for you."
    );
    assert_eq!(d.context(), ContextKind::Root);
    assert_eq!(transcript.spoken().len(), 3);
}

#[tokio::test]
async fn test_repeat_strips_only_first_command() {
    let (mut d, transcript) = dispatcher(&[]);
    d.handle("repeat after me").await.unwrap();

    d.handle("repeat after me hello there repeat after me").await.unwrap();
    assert_eq!(
        transcript.spoken().last().unwrap(),
        "hello there repeat after me"
    );
}

#[tokio::test]
async fn test_repeat_of_bare_command_says_nothing() {
    let (mut d, transcript) = dispatcher(&[]);
    d.handle("repeat after me").await.unwrap();
    let before = transcript.spoken().len();

    let out = d.handle("repeat after me").await.unwrap();
    assert_eq!(out, TurnOutcome::Fired { intent: "repeat_echo".to_string() });
    assert_eq!(transcript.spoken().len(), before, "Empty echo is skipped");
    assert_eq!(d.context(), ContextKind::RepeatMode);
}

#[tokio::test]
async fn test_goodbye_only_honored_at_root() {
    let (mut d, transcript) = dispatcher(&[]);

    d.handle("let's talk about music").await.unwrap();
    assert_eq!(d.context(), ContextKind::MusicChat);

    let out = d.handle("goodbye").await.unwrap();
    assert_eq!(out, TurnOutcome::Unmatched);
    assert!(!d.is_ended(), "Goodbye inside a sub-dialogue must not end the session");
    assert_eq!(d.context(), ContextKind::MusicChat);

    d.handle("who is your favorite composer").await.unwrap();
    assert_eq!(d.context(), ContextKind::Root);
    let spoken = transcript.spoken();
    assert_eq!(spoken[spoken.len() - 2], line(Category::ComposerLead));
    let composers = PhraseBank::standard();
    assert!(composers
        .get(Category::Composers)
        .unwrap()
        .contains_text(spoken.last().unwrap()));

    let out = d.handle("okay goodbye").await.unwrap();
    assert_eq!(out, TurnOutcome::Ended);
    assert!(d.is_ended());
    assert_eq!(transcript.spoken().last().unwrap(), &line(Category::Farewell));

    // Nothing runs after the session ended
    assert_eq!(d.handle("turn on the light").await.unwrap(), TurnOutcome::Ended);
    assert!(transcript.lights().is_empty());
}

#[tokio::test]
async fn test_music_chat_unmatched_is_silent_dead_end() {
    let (mut d, transcript) = dispatcher(&[]);
    d.handle("do you like music").await.unwrap();
    let spoken_before = transcript.spoken().len();

    for _ in 0..3 {
        assert_eq!(d.handle("hmm").await.unwrap(), TurnOutcome::Unmatched);
    }
    assert_eq!(transcript.spoken().len(), spoken_before, "No re-prompt in music chat");
    assert_eq!(d.context(), ContextKind::MusicChat);
    assert_eq!(d.stack.current().attempts, 0);

    d.handle("what other genres do you like").await.unwrap();
    let spoken = transcript.spoken();
    assert_eq!(spoken[spoken.len() - 2], line(Category::GenreLead));
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_mood_buckets_end_after_one_reply() {
    let (mut d, transcript) = dispatcher(&[]);

    d.handle("how are you").await.unwrap();
    assert_eq!(d.context(), ContextKind::MoodCheck);
    assert_eq!(d.handle("purple elephants").await.unwrap(), TurnOutcome::Unmatched);
    assert_eq!(d.stack.current().attempts, 0, "Mood check has no attempt counter");

    d.handle("i'm not good").await.unwrap();
    assert_eq!(transcript.spoken().last().unwrap(), &line(Category::MoodNegative));
    assert_eq!(d.context(), ContextKind::Root);

    d.handle("how are you").await.unwrap();
    d.handle("i am not feeling well").await.unwrap();
    assert_eq!(transcript.spoken().last().unwrap(), &line(Category::MoodIll));

    d.handle("how are you").await.unwrap();
    d.handle("pretty great actually").await.unwrap();
    assert_eq!(transcript.spoken().last().unwrap(), &line(Category::MoodPositive));
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_negated_positive_mood_is_negative() {
    let (mut d, transcript) = dispatcher(&[]);

    for utterance in ["i'm not well", "not happy at all", "i don't feel fine", "not so great"] {
        d.handle("how are you").await.unwrap();
        let out = d.handle(utterance).await.unwrap();
        assert_eq!(out, TurnOutcome::Fired { intent: "mood_negative".to_string() }, "{}", utterance);
        assert_eq!(
            transcript.spoken().last().unwrap(),
            &line(Category::MoodNegative),
            "'{}' must not get the positive reply",
            utterance
        );
        assert_eq!(d.context(), ContextKind::Root);
    }
}

#[tokio::test]
async fn test_language_demo_branches() {
    let (mut d, transcript) = dispatcher(&[]);

    d.handle("can you say things in other languages").await.unwrap();
    assert_eq!(d.context(), ContextKind::LanguageDemo);
    assert_eq!(transcript.spoken().last().unwrap(), "Yes. Tell me which language");

    // Anything unrelated re-prompts and stays
    d.handle("klingon please").await.unwrap();
    assert_eq!(transcript.spoken().last().unwrap(), &line(Category::LanguageMenu));
    assert_eq!(d.context(), ContextKind::LanguageDemo);

    d.handle("German").await.unwrap();
    assert_eq!(
        transcript.entries().last().unwrap(),
        &Observation::Said {
            text: "ich liebe dich".to_string(),
            lang: Some("de-DE".to_string())
        }
    );
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_language_caught_pulses_light_before_reply() {
    let (mut d, transcript) = dispatcher(&[]);

    d.handle("can you speak other languages").await.unwrap();
    transcript.clear();

    d.handle("do you speak klingon").await.unwrap();
    assert_eq!(
        transcript.entries(),
        vec![
            Observation::Light(LightState::On),
            Observation::Light(LightState::Off),
            Observation::Said {
                text: line(Category::LanguageCaught),
                lang: None
            },
        ]
    );
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_joke_teller_needs_leading_phrase_except_any() {
    let (mut d, transcript) = dispatcher(&[]);
    let bank = PhraseBank::standard();

    d.handle("tell me a joke").await.unwrap();
    assert_eq!(d.context(), ContextKind::JokeTeller);

    assert_eq!(d.handle("knock knock").await.unwrap(), TurnOutcome::Unmatched);
    assert_eq!(d.context(), ContextKind::JokeTeller);

    d.handle("tell me a knock knock joke").await.unwrap();
    assert!(bank
        .get(Category::KnockKnockJokes)
        .unwrap()
        .contains_text(transcript.spoken().last().unwrap()));
    assert_eq!(d.context(), ContextKind::Root);

    d.handle("tell me a joke").await.unwrap();
    d.handle("how about a dad joke").await.unwrap();
    assert!(bank
        .get(Category::DadJokes)
        .unwrap()
        .contains_text(transcript.spoken().last().unwrap()));

    d.handle("tell me a joke").await.unwrap();
    let out = d.handle("any").await.unwrap();
    assert_eq!(out, TurnOutcome::Fired { intent: "any_joke".to_string() });
    assert!(bank
        .get(Category::AnyJoke)
        .unwrap()
        .contains_text(transcript.spoken().last().unwrap()));
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_turn_passes_active_hints_and_language() {
    let (mut d, _transcript) = dispatcher(&["repeat after me", "hello", "i'm done"]);

    for _ in 0..3 {
        d.turn().await.unwrap();
    }

    let calls = d.recognizer().calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|(lang, _)| lang == "en_US"));
    assert!(calls[0].1.contains(&"goodbye".to_string()), "Root hints on first turn");
    assert_eq!(calls[1].1, vec!["i'm done".to_string(), "i am done".to_string()]);
    assert_eq!(calls[2].1, calls[1].1);
    assert_eq!(d.context(), ContextKind::Root);
}

#[tokio::test]
async fn test_nothing_heard_changes_nothing() {
    let transcript = Transcript::new();
    let mut d = Dispatcher::new(
        DialogueConfig::default(),
        ScriptedRecognizer::new(vec![Some("let's play trivia"), None, Some("   ")]),
        RecordingSpeech::new(transcript.clone()),
        RecordingIndicator::new(transcript.clone()),
    );

    d.turn().await.unwrap();
    let spoken = transcript.spoken().len();

    assert_eq!(d.turn().await.unwrap(), TurnOutcome::NothingHeard);
    assert_eq!(d.turn().await.unwrap(), TurnOutcome::NothingHeard);
    assert_eq!(d.context(), ContextKind::TriviaGame);
    assert_eq!(d.stack.current().attempts, 0, "Silence is not a trivia attempt");
    assert_eq!(transcript.spoken().len(), spoken);
    assert_eq!(d.turns(), 3);
}

#[tokio::test]
async fn test_run_until_goodbye() {
    let (mut d, transcript) = dispatcher(&["blink the light", "goodbye", "turn on the light"]);

    d.run().await.unwrap();

    assert!(d.is_ended());
    assert_eq!(transcript.lights(), vec![LightState::Blink]);
    assert_eq!(d.recognizer().remaining(), 1, "Nothing recognized after goodbye");
}

#[tokio::test]
async fn test_exhausted_recognizer_ends_run_with_error() {
    let (mut d, _transcript) = dispatcher(&["turn off the light"]);

    let err = d.run().await.unwrap_err();
    assert!(matches!(err, DispatchError::Recognizer(_)));
}

#[tokio::test]
async fn test_speech_failure_leaves_context_untouched() {
    let transcript = Transcript::new();
    let mut d = Dispatcher::new(
        DialogueConfig::default(),
        ScriptedRecognizer::default(),
        RecordingSpeech::failing(transcript.clone()),
        RecordingIndicator::new(transcript.clone()),
    );

    let err = d.handle("repeat after me").await.unwrap_err();
    assert!(matches!(err, DispatchError::Speech(_)));
    assert_eq!(d.context(), ContextKind::Root, "No transition after a failed effect");
    assert_eq!(d.stack.depth(), 1);
}

#[tokio::test]
async fn test_indicator_failure_aborts_before_reply() {
    let transcript = Transcript::new();
    let mut d = Dispatcher::new(
        DialogueConfig::default(),
        ScriptedRecognizer::default(),
        RecordingSpeech::new(transcript.clone()),
        RecordingIndicator::failing(transcript.clone()),
    );

    d.handle("can you speak other languages").await.unwrap();
    transcript.clear();

    let err = d.handle("do you speak klingon").await.unwrap_err();
    assert!(matches!(err, DispatchError::Indicator(_)));
    assert!(transcript.spoken().is_empty(), "Reply comes after the light pulse");
    assert_eq!(d.context(), ContextKind::LanguageDemo);
}
