//! Fixed reply texts sent back to chat users

/// Prompt sent for any text that is not the weather keyword
pub const FALLBACK_PROMPT: &str = "請輸入 PCD 取得板橋天氣";

/// The weather provider API key is not configured
pub const WEATHER_NOT_CONFIGURED: &str = "❌ 尚未設定 CWA_API_KEY";

/// The weather provider could not be reached or answered with an error status
pub const WEATHER_QUERY_FAILED: &str = "❌ 查詢氣象資料失敗，請稍後再試";

/// The weather provider answered, but not in the expected shape
pub const WEATHER_FORMAT_INVALID: &str = "❌ 氣象資料格式異常，請稍後再試";

/// Placeholder for a weather field the provider did not include
pub const UNKNOWN_VALUE: &str = "未知";
