// ============================================================================
// GEOPIN PWA - MAPA CON MARCADORES ALEATORIOS (RUST PURO)
// ============================================================================
// Arquitectura:
// - components: pantallas y widgets Yew (sin lógica de plataforma)
// - hooks: estado local de cada pantalla + callbacks
// - viewmodels: preparación de datos para el widget de mapa
// - services: SOLO llamadas a APIs del navegador (permisos, geolocalización)
// - state: contenedores de estado puros (testeables sin navegador)
// - models: estructuras compartidas
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
