use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every reply slot the dialogue can speak from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Farewell,

    RepeatReady,
    RepeatClosing,

    LanguageOffer,
    LanguageMenu,
    LanguageCaught,
    German,
    Spanish,
    French,
    Italian,

    MoodQuestion,
    MoodPositive,
    MoodNegative,
    MoodIll,

    TriviaQuestion,
    TriviaCorrect,
    TriviaAnswer,
    TriviaHint,
    TriviaRetry,

    MusicOpener,
    GenreLead,
    Genres,
    ComposerLead,
    Composers,

    JokeMenu,
    KnockKnockJokes,
    DadJokes,
    AnyJoke,
}

/// A single candidate reply. `lang` selects the voice; `None` means the
/// session's ambient language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub lang: Option<String>,
}

impl Reply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
        }
    }

    pub fn tagged(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: Some(lang.into()),
        }
    }
}

/// Interchangeable replies. Selection is a uniform draw with no memory of
/// previous picks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplySet {
    replies: Vec<Reply>,
}

impl ReplySet {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies }
    }

    pub fn single(reply: Reply) -> Self {
        Self { replies: vec![reply] }
    }

    pub fn untagged<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: lines.into_iter().map(Reply::new).collect(),
        }
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Reply> {
        self.replies.choose(rng)
    }

    pub fn replies(&self) -> &[Reply] {
        &self.replies
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.replies.iter().any(|r| r.text == text)
    }

    fn extend(&mut self, other: &ReplySet) {
        self.replies.extend(other.replies.iter().cloned());
    }
}

/// Static catalog of replies, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct PhraseBank {
    sets: HashMap<Category, ReplySet>,
}

impl PhraseBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, set: ReplySet) {
        self.sets.insert(category, set);
    }

    pub fn get(&self, category: Category) -> Option<&ReplySet> {
        self.sets.get(&category).filter(|set| !set.is_empty())
    }

    pub fn standard() -> Self {
        use Category::*;

        let mut bank = Self::new();
        let mut fixed = |category: Category, text: &str| {
            bank.insert(category, ReplySet::single(Reply::new(text)));
        };

        fixed(Farewell, "Goodbye. Talk to you soon.");

        fixed(RepeatReady, "Okay. Ready.");
        fixed(RepeatClosing, "Great. I hope that was fun for you.");

        fixed(LanguageOffer, "Yes. Tell me which language");
        fixed(
            LanguageMenu,
            "I can say something in German, Spanish, French, or Italian. Which one would you like?",
        );
        fixed(
            LanguageCaught,
            "You caught me. I don't actually speak Klingon.",
        );

        fixed(MoodQuestion, "I'm doing well, thank you. How are you feeling today?");
        fixed(MoodPositive, "I'm glad to hear that!");
        fixed(MoodNegative, "I'm sorry to hear that. I hope things get better soon.");
        fixed(MoodIll, "Oh no. Get some rest and feel better soon.");

        fixed(
            TriviaQuestion,
            "Here is your question. What is the largest planet in our solar system?",
        );
        fixed(TriviaCorrect, "That's right! Jupiter is the largest planet. Well done.");
        fixed(TriviaAnswer, "No worries. The answer is Jupiter.");
        fixed(
            TriviaHint,
            "Here's a hint. It is a gas giant named after the king of the Roman gods.",
        );
        fixed(TriviaRetry, "Not quite. Try again.");

        fixed(
            MusicOpener,
            "I love music. Ask me about my favorite composer, or what other genres I like.",
        );
        fixed(GenreLead, "Besides classical, I also enjoy");
        fixed(ComposerLead, "My favorite composer is");
        fixed(JokeMenu, "Sure. Do you want a knock knock joke, a dad joke, or any joke?");

        bank.insert(
            Genres,
            ReplySet::untagged(["jazz", "blues", "bossa nova", "folk", "electronic music"]),
        );
        bank.insert(
            Composers,
            ReplySet::new(vec![
                Reply::tagged("Johann Sebastian Bach", "de-DE"),
                Reply::tagged("Claude Debussy", "fr-FR"),
                Reply::tagged("Antonio Vivaldi", "it-IT"),
                Reply::tagged("Manuel de Falla", "es-ES"),
                Reply::new("Aaron Copland"),
            ]),
        );

        bank.insert(German, ReplySet::single(Reply::tagged("ich liebe dich", "de-DE")));
        bank.insert(Spanish, ReplySet::single(Reply::tagged("te amo", "es-ES")));
        bank.insert(French, ReplySet::single(Reply::tagged("je t'aime", "fr-FR")));
        bank.insert(Italian, ReplySet::single(Reply::tagged("ti amo", "it-IT")));

        let knock_knock = ReplySet::untagged([
            "Knock knock. Who's there? Lettuce. Lettuce who? Lettuce in, it's cold out here!",
            "Knock knock. Who's there? Boo. Boo who? Don't cry, it's only a joke.",
            "Knock knock. Who's there? Olive. Olive who? Olive you and I miss you.",
        ]);
        let dad = ReplySet::untagged([
            "I'm reading a book about anti-gravity. It's impossible to put down.",
            "Why don't skeletons fight each other? They don't have the guts.",
            "I used to hate facial hair, but then it grew on me.",
        ]);
        let mut any = ReplySet::default();
        any.extend(&knock_knock);
        any.extend(&dad);

        bank.insert(KnockKnockJokes, knock_knock);
        bank.insert(DadJokes, dad);
        bank.insert(AnyJoke, any);

        bank
    }
}
