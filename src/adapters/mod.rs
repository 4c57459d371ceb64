// Adapters layer: 外部推薦服務的 HTTP 實作

pub mod ai_client;
