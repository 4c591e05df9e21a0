#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskStatusUpdated,
    TaskNotFoundWithId(String), // id
    NoTasksFound,
    TasksHeader(String), // active status filter
    ConfirmDeleteTask,
    TaskDeleteCancelled,
    EditingTask(String), // title
    AddingTask,

    // === AUTHENTICATION MESSAGES ===
    LoggedIn(String), // username
    LoggedOut,
    AlreadyLoggedIn,
    NotLoggedIn,
    RegistrationSuccessful,
    SessionExpired,
    SessionStoreFailed(String), // error message

    // === API MESSAGES ===
    ApiRequestFailed,
    RequestError(String), // error message

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,

    // === PROMPTS ===
    PromptUsername,
    PromptPassword,
    PromptConfirmPassword,
    PromptPasswordMismatch,
    PromptApiUrl,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskPriority,
    PromptSelectAction,
    PromptSelectTask,
    PromptStatusFilter,
    PromptSearch,

    // === DASHBOARD MENU ===
    MenuLogin,
    MenuRegister,
    MenuAddTask,
    MenuEditTask,
    MenuToggleTask,
    MenuDeleteTask,
    MenuFilter,
    MenuSearch,
    MenuRefresh,
    MenuLogout,
    MenuQuit,
}
