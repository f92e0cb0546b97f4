use std::sync::Arc;

use rand::Rng;

use super::ChatError;
use crate::profile::{Profile, Project, JOKES, PROFILE, PROJECTS};

pub const FALLBACK_REPLY: &str = "Sorry, I don't understand that yet!";

/// Source of the index used to pick a joke.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Fixed(String),
    Joke,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    triggers: Vec<String>,
    reply: Reply,
}

impl Rule {
    pub fn new(triggers: &[&str], reply: Reply) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            reply,
        }
    }

    pub fn fixed(trigger: &str, reply: impl Into<String>) -> Self {
        Self::new(&[trigger], Reply::Fixed(reply.into()))
    }

    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|t| normalized.contains(t.as_str()))
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn reply(&self) -> &Reply {
        &self.reply
    }
}

/// Priority-ordered rules. The first rule that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn for_profile(profile: &Profile, projects: &[Project]) -> Self {
        let project_list = projects
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(vec![
            Rule::fixed("name", format!("I am {}, {}.", profile.name, profile.title)),
            Rule::fixed("email", format!("You can email me at {}", profile.email)),
            Rule::fixed("phone", format!("You can call me at {}", profile.phone)),
            Rule::fixed("linkedin", format!("LinkedIn: {}", profile.linkedin)),
            Rule::fixed("github", format!("GitHub: {}", profile.github)),
            Rule::fixed("projects", format!("My projects include:\n{project_list}")),
            Rule::new(&["joke", "funny"], Reply::Joke),
        ])
    }

    pub fn first_match(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(normalized))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokePool {
    jokes: Vec<String>,
}

impl JokePool {
    pub fn new<I, S>(jokes: I) -> Result<Self, ChatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let jokes = jokes.into_iter().map(Into::into).collect::<Vec<_>>();
        if jokes.is_empty() {
            return Err(ChatError::EmptyJokePool);
        }
        Ok(Self { jokes })
    }

    pub fn draw(&self, random: &dyn RandomSource) -> &str {
        let i = random.pick(self.jokes.len()).min(self.jokes.len() - 1);
        &self.jokes[i]
    }

    pub fn contains(&self, joke: &str) -> bool {
        self.jokes.iter().any(|j| j == joke)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }
}

impl Default for JokePool {
    fn default() -> Self {
        Self {
            jokes: JOKES.iter().map(|j| j.to_string()).collect(),
        }
    }
}

/// Maps a visitor message to exactly one reply.
///
/// Matching is plain substring containment on the lowercased message, so
/// "phonetics" still triggers the phone rule.
pub struct ReplyEngine {
    rules: RuleSet,
    jokes: JokePool,
    random: Arc<dyn RandomSource>,
}

impl ReplyEngine {
    pub fn new(rules: RuleSet, jokes: JokePool) -> Self {
        Self {
            rules,
            jokes,
            random: Arc::new(ThreadRandom),
        }
    }

    pub fn with_random_source(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn classify(&self, text: &str) -> String {
        let normalized = text.to_lowercase();
        match self.rules.first_match(&normalized).map(Rule::reply) {
            Some(Reply::Fixed(s)) => s.clone(),
            Some(Reply::Joke) => self.jokes.draw(self.random.as_ref()).to_string(),
            None => FALLBACK_REPLY.to_string(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn jokes(&self) -> &JokePool {
        &self.jokes
    }
}

impl Default for ReplyEngine {
    fn default() -> Self {
        Self::new(RuleSet::for_profile(&PROFILE, PROJECTS), JokePool::default())
    }
}
