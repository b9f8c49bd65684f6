/// Every user-facing message in the application. The text itself lives in
/// the `Display` implementation next door.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigUnreadable(String), // error
    PromptSelectModules,
    PromptThemePalette,
    PromptDailyGoal,

    // === NOTE MESSAGES ===
    NoteCreated(String),       // title
    NoteUpdated(String),       // title
    NoteDeleted,
    NoteNotFound(String),      // id
    NoteEmpty,
    NoteSaveFailed,
    NoNotesFound,
    NotesHeader,
    ConfirmDeleteNote(String), // title
    PromptNoteTitle,
    PromptNoteContent,

    // === CALENDAR MESSAGES ===
    DayMarked(String),   // date
    DayUnmarked(String), // date
    DayNoteSaved(String),
    DayTaskAdded(String),
    DayTaskRemoved(String),
    DayCleared(String),
    NoDayData(String),
    TaskIndexOutOfRange(usize),
    TaskEmpty,
    InvalidDate(String),
    NoCalendarData,
    CalendarHeader,
    CalendarSaveFailed,
    ConfirmClearDay(String),
    PromptDayNote,

    // === WATER MESSAGES ===
    WaterGlassAdded(i64),   // count for today
    WaterGlassRemoved(i64), // count for today
    WaterAtZero,
    WaterReset,
    WaterGoalReached(i64), // goal in glasses
    WaterSaveFailed,

    // === OVERVIEW MESSAGES ===
    Greeting(String, String), // greeting, date line
    StreakDays(i64),
    DailyQuote(String),
    WeekActivity(i64),

    // === ACCOUNT MESSAGES ===
    UsernameSaved(String),
    UsernameEmpty,
    UsernameSaveFailed,
    NoUsernameSet,
    CurrentUsername(String),
    LoginSuccess(String), // email
    LoginMissingFields,
    LoginPasswordTooShort,
    PromptEmail,
    PromptPassword,

    // === COMMON MESSAGES ===
    OperationCancelled,
}
