/// Clave de localStorage para la sesión de Supabase
pub const STORAGE_KEY_AUTH_SESSION: &str = "dr-memo.auth-session";

/// Edge function que notifica a los responsables
pub const NOTIFY_GUARDIANS_FUNCTION: &str = "notify-guardians";

/// Rol que habilita `/admin`
pub const ADMIN_ROLE: &str = "admin";

/// Id del contenedor raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";
