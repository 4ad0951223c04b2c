//! User-facing Spanish strings shown by the results page.

pub const LOADING: &str = "Cargando juegos...";
pub const LOAD_ERROR: &str = "Error al cargar los datos. Por favor, intenta de nuevo más tarde.";
pub const NO_GAMES: &str = "No hay juegos disponibles.";
pub const NO_MATCHES: &str = "No se encontraron juegos para esta búsqueda.";
pub const NOTHING_TO_SHOW: &str = "No hay juegos para mostrar";

pub const TIE: &str = "Empate";
pub const UNDETERMINED: &str = "No determinado";

pub const GAME_ID: &str = "ID del Juego:";
pub const WINNER: &str = "Ganador: ";

pub const STANDOUTS_TITLE: &str = "Jugadores Destacados";
pub const LUCKIEST: &str = "Jugador con más suerte";
pub const MOST_EXPERIENCED: &str = "Jugador con más experiencia";
pub const NO_STANDOUTS: &str = "No hay información de jugadores destacados";

pub const RESULTS_TITLE: &str = "Resultados del Juego";
pub const GENDER_TITLE: &str = "Victorias por Género";
pub const LEADING_GENDER: &str = "Género con más victorias";
pub const MALE: &str = "Masculino";
pub const FEMALE: &str = "Femenino";
pub const THIS_GAME: &str = "Este juego";
pub const CUMULATIVE: &str = "Acumulado";

pub const TEAM_WINS_TITLE: &str = "Victorias por Equipo";
pub const LUCKIEST_TITLE: &str = "Jugadores con Más Suerte";
pub const EXPERIENCED_TITLE: &str = "Jugadores con Más Experiencia";

pub const PREVIOUS: &str = "Anterior";
pub const NEXT: &str = "Siguiente";
pub const ELLIPSIS: &str = "…";

pub const SEARCH_PLACEHOLDER: &str = "Buscar por número de juego o equipo...";
pub const PAGE_SIZE: &str = "Juegos por página";
