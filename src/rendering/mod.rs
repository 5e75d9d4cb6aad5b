pub mod hud;
pub mod road_renderer;
