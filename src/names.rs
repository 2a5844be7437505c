use std::num::NonZeroU32;

pub const ROOT_URL: &str = "/";
pub const START_QUIZ_URL: &str = "/start-quiz";
pub const NEXT_SESSION_URL: &str = "/next-session";
pub const RETRY_SESSION_URL: &str = "/retry-session";
pub const SUBMIT_ANSWER_URL: &str = "/submit-answer";
pub const NEXT_QUESTION_URL: &str = "/next-question";
pub const STATIC_URL: &str = "/static";

// Question source defaults
pub const OPEN_TRIVIA_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_CATEGORY: &str = "17";
pub const QUESTION_TYPE: &str = "multiple";
pub const QUESTION_ENCODING: &str = "url3986";

// Quiz defaults
pub const DEFAULT_QUESTIONS_PER_SESSION: NonZeroU32 = NonZeroU32::new(10).unwrap();
pub const DEFAULT_SESSIONS: NonZeroU32 = NonZeroU32::new(5).unwrap();
pub const DEFAULT_SESSION_SECONDS: u64 = 180;
pub const POINTS_PER_QUESTION: u32 = 10;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";
