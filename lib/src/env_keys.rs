pub static GROQ_API_KEY: &str = "GROQ_API_KEY";
pub static GROQ_API_URL: &str = "GROQ_API_URL";
pub static CHAT_MODEL: &str = "CHAT_MODEL";

pub static SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub static SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub static SPOTIFY_TOKEN_URL: &str = "SPOTIFY_TOKEN_URL";
pub static SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";

// client side
pub static SOULSYNC_API_URL: &str = "SOULSYNC_API_URL";
pub static SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
