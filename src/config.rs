/// URL del servidor de tiles del mapa
/// Configurada en tiempo de compilación:
/// - Por defecto: OpenStreetMap
/// - Custom: via TILE_URL env var (ver .env.example)
pub const TILE_URL: &str = match option_env!("TILE_URL") {
    Some(url) => url,
    None => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
};
