//! Stock intent bindings for every dialogue context.

use super::table::IntentTable;
use super::types::{Intent, Trigger};
use crate::kernel::context::{ContextKind, Transition};
use crate::kernel::phrases::Category;
use crate::outputs::indicator::LightState;

pub const REPEAT_COMMAND: &str = "repeat after me";
pub const GOODBYE: &str = "goodbye";
pub const TRIVIA_ANSWER: &str = "jupiter";

const MOOD_POSITIVE: [&str; 6] = ["good", "great", "fine", "happy", "well", "awesome"];
const MOOD_NEGATORS: [&str; 4] = ["not ", "n't", "never", "no longer"];

impl IntentTable {
    pub fn standard() -> Self {
        let mut table = Self::new();
        register_root(&mut table);
        register_repeat_mode(&mut table);
        register_mood_check(&mut table);
        register_language_demo(&mut table);
        register_trivia_game(&mut table);
        register_music_chat(&mut table);
        register_joke_teller(&mut table);
        table
    }
}

fn register_root(table: &mut IntentTable) {
    use ContextKind::*;
    let root = Root;

    table
        .register(
            root,
            Intent::new("light_on", Trigger::phrase("turn on the light")).light(LightState::On),
        )
        .register(
            root,
            Intent::new("light_off", Trigger::phrase("turn off the light")).light(LightState::Off),
        )
        .register(
            root,
            Intent::new("light_blink", Trigger::phrase("blink the light")).light(LightState::Blink),
        )
        .register(
            root,
            Intent::new("repeat_after_me", Trigger::phrase(REPEAT_COMMAND))
                .say(Category::RepeatReady)
                .then(Transition::Enter(RepeatMode)),
        )
        .register(
            root,
            // Two phrasings, one action.
            Intent::new(
                "other_languages",
                Trigger::any([
                    "can you speak other languages",
                    "can you say things in other languages",
                ]),
            )
            .say(Category::LanguageOffer)
            .then(Transition::Enter(LanguageDemo)),
        )
        .register(
            root,
            Intent::new("how_are_you", Trigger::phrase("how are you"))
                .say(Category::MoodQuestion)
                .then(Transition::Enter(MoodCheck)),
        )
        .register(
            root,
            Intent::new("trivia", Trigger::any(["trivia", "play a game"]))
                .say(Category::TriviaQuestion)
                .then(Transition::Enter(TriviaGame)),
        )
        .register(
            root,
            Intent::new("music", Trigger::phrase("music"))
                .say(Category::MusicOpener)
                .then(Transition::Enter(MusicChat)),
        )
        .register(
            root,
            Intent::new("joke", Trigger::phrase("joke"))
                .say(Category::JokeMenu)
                .then(Transition::Enter(JokeTeller)),
        )
        .register(
            root,
            Intent::new("goodbye", Trigger::phrase(GOODBYE))
                .say(Category::Farewell)
                .then(Transition::End),
        );
}

fn register_repeat_mode(table: &mut IntentTable) {
    let ctx = ContextKind::RepeatMode;

    table
        .register(
            ctx,
            Intent::new("repeat_done", Trigger::any(["i'm done", "i am done"]))
                .say(Category::RepeatClosing)
                .then(Transition::Return),
        )
        .register(ctx, Intent::new("repeat_echo", Trigger::Always).echo(REPEAT_COMMAND));
}

fn register_mood_check(table: &mut IntentTable) {
    let ctx = ContextKind::MoodCheck;

    // Ill and negative come first so "not feeling well" and "not good" never
    // land in the positive bucket.
    table
        .register(
            ctx,
            Intent::new(
                "mood_ill",
                Trigger::any(["sick", "unwell", "not feeling well", "under the weather"]),
            )
            .say(Category::MoodIll)
            .then(Transition::Return),
        )
        .register(
            ctx,
            // Also catches a negated positive word: "not happy", "i don't feel fine".
            Intent::new(
                "mood_negative",
                Trigger::AnyOf(vec![
                    Trigger::any(["bad", "sad", "terrible", "awful"]),
                    Trigger::all([Trigger::any(MOOD_NEGATORS), Trigger::any(MOOD_POSITIVE)]),
                ]),
            )
            .say(Category::MoodNegative)
            .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new("mood_positive", Trigger::any(MOOD_POSITIVE))
                .say(Category::MoodPositive)
                .then(Transition::Return),
        );
}

fn register_language_demo(table: &mut IntentTable) {
    let ctx = ContextKind::LanguageDemo;

    for (name, keyword, category) in [
        ("say_german", "german", Category::German),
        ("say_spanish", "spanish", Category::Spanish),
        ("say_french", "french", Category::French),
        ("say_italian", "italian", Category::Italian),
    ] {
        table.register(
            ctx,
            Intent::new(name, Trigger::phrase(keyword))
                .say(category)
                .then(Transition::Return),
        );
    }

    table
        .register(
            ctx,
            // The light pulses before the reply on this branch.
            Intent::new(
                "language_caught",
                Trigger::all([Trigger::phrase("speak"), Trigger::phrase("klingon")]),
            )
            .light(LightState::On)
            .light(LightState::Off)
            .say(Category::LanguageCaught)
            .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new("language_menu", Trigger::Always).say(Category::LanguageMenu),
        );
}

fn register_trivia_game(table: &mut IntentTable) {
    let ctx = ContextKind::TriviaGame;

    table
        .register(
            ctx,
            Intent::new("trivia_correct", Trigger::phrase(TRIVIA_ANSWER))
                .say(Category::TriviaCorrect)
                .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new(
                "trivia_give_up",
                Trigger::any(["i give up", "tell me the answer"]),
            )
            .say(Category::TriviaAnswer)
            .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new("trivia_attempt", Trigger::Always)
                .attempt(Category::TriviaHint, Category::TriviaRetry),
        );
}

// No catch-all here: an unmatched utterance re-loops silently.
fn register_music_chat(table: &mut IntentTable) {
    let ctx = ContextKind::MusicChat;

    table
        .register(
            ctx,
            Intent::new("other_genres", Trigger::any(["genre", "what else"]))
                .say(Category::GenreLead)
                .say_one_of(Category::Genres)
                .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new("favorite_composer", Trigger::phrase("composer"))
                .say(Category::ComposerLead)
                .say_one_of(Category::Composers)
                .then(Transition::Return),
        );
}

fn register_joke_teller(table: &mut IntentTable) {
    let ctx = ContextKind::JokeTeller;
    let lead = || Trigger::any(["how about", "tell me"]);

    table
        .register(
            ctx,
            Intent::new(
                "knock_knock_joke",
                Trigger::all([lead(), Trigger::phrase("knock knock")]),
            )
            .say_one_of(Category::KnockKnockJokes)
            .then(Transition::Return),
        )
        .register(
            ctx,
            Intent::new("dad_joke", Trigger::all([lead(), Trigger::phrase("dad")]))
                .say_one_of(Category::DadJokes)
                .then(Transition::Return),
        )
        .register(
            ctx,
            // "any" needs no leading phrase.
            Intent::new("any_joke", Trigger::phrase("any"))
                .say_one_of(Category::AnyJoke)
                .then(Transition::Return),
        );
}
