//! Curated data for the Barcelona port call: itinerary, GPX waypoints,
//! the planned walking track and the Catalan phrasebook.

use chrono::NaiveTime;

use crate::domain::{Cents, Coords, EntryKind, GpxWaypoint, ItineraryEntry, Pronunciation};

pub const PORT: Coords = Coords::new(41.362895, 2.181948);
pub const COLON: Coords = Coords::new(41.375798, 2.177774);
pub const SAGRADA_FAMILIA: Coords = Coords::new(41.40406, 2.173935);
pub const LA_PEDRERA: Coords = Coords::new(41.395174, 2.161777);
pub const CASA_BATLLO: Coords = Coords::new(41.391714, 2.165002);
pub const BOQUERIA: Coords = Coords::new(41.381939, 2.172071);
pub const DRASSANES: Coords = Coords::new(41.376913, 2.1759);
pub const PASSEIG_DE_GRACIA: Coords = Coords::new(41.391519, 2.165324);
pub const LICEU: Coords = Coords::new(41.381387, 2.173061);
pub const SANTA_MARIA_DEL_MAR: Coords = Coords::new(41.383497, 2.181772);

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

/// The day's plan, in catalog order (already sorted by start)
pub fn barcelona_itinerary() -> Vec<ItineraryEntry> {
    vec![
        ItineraryEntry {
            description: "Llegada del barco a puerto. Preparación para el desembarque.".into(),
            key_details: "Tener a mano la **tarjeta de embarque**.".into(),
            critical: true,
            ..ItineraryEntry::new("1", "Llegada al Puerto de Barcelona", at(8, 0), at(8, 0), "Terminal de Cruceros Barcelona", PORT, EntryKind::Logistics)
        },
        ItineraryEntry {
            end_location_name: text("Monumento a Colón"),
            end_coords: Some(COLON),
            description: "Traslado en autobús lanzadera (Cruise Bus azul) hasta el Monumento a Colón.".into(),
            key_details: "Comprar ticket en el bus (aprox 4.50€ ida/vuelta).".into(),
            price: Cents::from_euros(4, 50),
            contingency_note: text("Si hay mucha cola, valorar taxi compartido (15-20€)."),
            ..ItineraryEntry::new("2", "Desembarco y Shuttle (Cruise Bus)", at(9, 45), at(10, 15), "Terminal de Cruceros", PORT, EntryKind::Transport)
        },
        ItineraryEntry {
            end_location_name: text("Metro Sagrada Familia"),
            end_coords: Some(SAGRADA_FAMILIA),
            description: "L3 Drassanes -> Paral·lel (transbordo) -> L2 Sagrada Família.".into(),
            key_details: "Usar tarjeta T-Familiar. *Atención carteristas.*".into(),
            price: Cents::from_euros(2, 90),
            navigation_url: text("https://maps.app.goo.gl/pcdyeNVY2btj4WPS8"),
            ..ItineraryEntry::new("3", "Metro a Sagrada Familia", at(10, 40), at(11, 10), "Metro Drassanes (L3)", DRASSANES, EntryKind::Transport)
        },
        ItineraryEntry {
            description: "Visita exterior de la Fachada de la Pasión y Natividad. La gran obra maestra inacabada de Antoni Gaudí.".into(),
            key_details: "Fotos desde Plaza de Gaudí (parque con lago).".into(),
            contingency_note: text("Entrada estricta con hora reservada. Si no hay tickets, visitar tienda oficial."),
            audio_guide: text("Estás ante el monumento más visitado de España. La Sagrada Familia es una biblia en piedra. Gaudí dedicó sus últimos 12 años exclusivamente a esta basílica. Observa la Fachada del Nacimiento: es una explosión de vida y naturaleza. Al otro lado, la Fachada de la Pasión es austera y angular, representando el sufrimiento. Cuando se termine, su torre central será el punto más alto de Barcelona, pero siempre un metro por debajo de la montaña de Montjuic, porque Gaudí decía que la obra del hombre no debe superar a la de Dios."),
            ..ItineraryEntry::new("4", "Basílica Sagrada Familia", at(11, 20), at(12, 20), "Sagrada Família", SAGRADA_FAMILIA, EntryKind::Sightseeing)
        },
        ItineraryEntry {
            end_location_name: text("La Pedrera (Casa Milà)"),
            end_coords: Some(LA_PEDRERA),
            description: "Caminata por el Eixample, el corazón del diseño burgués de principios del siglo XX.".into(),
            key_details: "Distancia **1.4km**. Ruta agradable y plana.".into(),
            audio_guide: text("Estamos recorriendo el Eixample, un barrio diseñado con una cuadrícula perfecta por Ildefons Cerdà. Al final de este paseo nos espera La Pedrera. Su nombre oficial es Casa Milà, pero los barceloneses la apodaron 'la cantera' por su aspecto rudo de piedra ondulada. Gaudí se inspiró en las formas de la naturaleza, por eso no verás ni una sola línea recta en su fachada. Sus balcones de hierro forjado parecen algas marinas y su azotea es famosa por las chimeneas que parecen guerreros petrificados."),
            ..ItineraryEntry::new("5", "Paseo Modernista a La Pedrera", at(12, 20), at(12, 50), "Paseo de Gracia", SAGRADA_FAMILIA, EntryKind::Walk)
        },
        ItineraryEntry {
            description: "Admiración de la joya de la 'Manzana de la Discordia'. La fachada más colorida de la ciudad.".into(),
            key_details: "Admirar fachada y Casa Amatller (al lado).".into(),
            audio_guide: text("Mira la fachada de la Casa Batlló. Es una de las obras más creativas de Gaudí. Muchos ven en ella la leyenda de Sant Jordi: el tejado escamoso es el lomo del dragón, y la torre con la cruz es la lanza del caballero. Las columnas de las plantas bajas parecen huesos, por eso también se la conoce como la 'Casa de los Huesos'. Los balcones tienen forma de antifaces, y todo el conjunto brilla con fragmentos de cerámica de colores que imitan la superficie de un mar en calma."),
            ..ItineraryEntry::new("6", "Casa Batlló", at(12, 50), at(13, 0), "Passeig de Gràcia", CASA_BATLLO, EntryKind::Sightseeing)
        },
        ItineraryEntry {
            end_location_name: text("Metro Liceu"),
            end_coords: Some(LICEU),
            description: "L3 directa (Línea Verde) dirección Zona Universitària. 2 paradas.".into(),
            key_details: "Transbordo gratuito si ha pasado poco tiempo.".into(),
            price: Cents::from_euros(2, 90),
            navigation_url: text("https://maps.app.goo.gl/PZegJ2aRa87uQQdk7"),
            ..ItineraryEntry::new("7", "Metro Paseo de Gràcia a Liceu", at(13, 0), at(13, 20), "Metro Paseo de Gràcia (L3)", PASSEIG_DE_GRACIA, EntryKind::Transport)
        },
        ItineraryEntry {
            description: "Recorrido por la vía más famosa de Barcelona hacia el laberinto medieval.".into(),
            key_details: "Evitar terrazas y sitios para comer que son **muy caros** en esta zona".into(),
            audio_guide: text("Caminas por Las Ramblas, un antiguo torrente de agua que hoy es la arteria de la ciudad. A tu derecha está el Mercado de la Boquería; aunque hoy domingo esté cerrado, su estructura metálica de mil novecientos catorce sigue siendo impresionante. Al adentrarnos en las calles laterales, pasamos del ruido de la rambla al silencio del Barrio Gótico. Aquí se encontraba la antigua ciudad romana de Barcino y todavía hoy podemos ver restos de sus murallas y el trazado de sus plazas señoriales."),
            ..ItineraryEntry::new("8", "Paseo de La Rambla al Barrio Gótico", at(13, 30), at(14, 0), "Mercado de la Boquería", BOQUERIA, EntryKind::Walk)
        },
        ItineraryEntry {
            description: "Paseo histórico por las callejuelas del centro. El corazón de la Barcelona medieval.".into(),
            key_details: "La Catedral del Mar.".into(),
            audio_guide: text("Llegamos a Santa Maria del Mar, conocida como la Catedral del Mar. Es el ejemplo más perfecto del gótico catalán. A diferencia del gótico francés, aquí prima la horizontalidad y la sobriedad. Fue construida en un tiempo récord de cincuenta y cuatro años gracias al esfuerzo de los 'bastaixos', los estibadores del puerto, que cargaban las piedras una a una desde la montaña de Montjuic. Su interior es un espacio diáfano y elegante donde la luz juega un papel fundamental a través de sus rosetones."),
            ..ItineraryEntry::new("9", "Barrio Gótico y Catedral del Mar", at(14, 0), at(14, 30), "Basílica de Santa Maria del Mar", SANTA_MARIA_DEL_MAR, EntryKind::Walk)
        },
        ItineraryEntry {
            end_location_name: text("Monumento a Colón"),
            end_coords: Some(COLON),
            description: "Paseo por el Paseo Marítimo para tomar el shuttle. Disfrutando de la brisa marina.".into(),
            key_details: "Paseo de unos 20-25 minutos por el frente marítimo.".into(),
            audio_guide: text("Estamos regresando hacia el puerto por el frente marítimo. A tu izquierda queda el Port Vell, el puerto antiguo, que fue renovado totalmente para las Olimpiadas de mil novecientos noventa y dos. Al fondo verás la columna de Colón, con el almirante señalando hacia el mar. Es el momento ideal para tomar las últimas fotos del skyline de Barcelona y prepararnos para el regreso al barco. Recuerda verificar que tienes contigo todos los tickets y la tarjeta del crucero."),
            ..ItineraryEntry::new("10", "Regreso a Shuttle", at(14, 30), at(15, 0), "Catedral del Mar", SANTA_MARIA_DEL_MAR, EntryKind::Walk)
        },
        ItineraryEntry {
            end_location_name: text("Terminal de Cruceros"),
            end_coords: Some(PORT),
            description: "Autobús de vuelta a la terminal. Suele haber cola.".into(),
            key_details: "Tener el ticket de vuelta preparado.".into(),
            ..ItineraryEntry::new("11", "Shuttle Bus al Barco / COMEMOS EN EL BARCO", at(15, 0), at(15, 30), "Monumento a Colón", COLON, EntryKind::Transport)
        },
        ItineraryEntry {
            description: "Límite de tiempo para estar en el barco. Control de seguridad.".into(),
            key_details: "Verificar hora real en diario de a bordo.".into(),
            critical: true,
            contingency_note: text("El barco no espera. ¡No llegues tarde!"),
            ..ItineraryEntry::new("12", "TODOS A BORDO", at(17, 30), at(17, 30), "Terminal de Cruceros", PORT, EntryKind::Logistics)
        },
        ItineraryEntry {
            description: "Salida del puerto. Fin de la escala.".into(),
            key_details: "Disfrutar del skyline de Barcelona desde cubierta.".into(),
            ..ItineraryEntry::new("13", "Zarpe del Barco", at(18, 0), at(18, 0), "Puerto de Barcelona", PORT, EntryKind::Logistics)
        },
    ]
}

pub fn gpx_waypoints() -> Vec<GpxWaypoint> {
    [
        ("EDIFICIO WORLD TRADE CENTER", 41.371587, 2.181265),
        ("CRUISE BUS (AZUL)", 41.37182, 2.179492),
        ("METRO DRASSANES", 41.376913, 2.1759),
        ("MONUMENTO A COLÓN", 41.375798, 2.177774),
        ("METRO PASEO DE GRACIA", 41.391519, 2.165324),
        ("LA PEDRERA - RUTA DEL MODERNISMO", 41.395174, 2.161777),
        ("Casa Batlló", 41.391714, 2.165002),
        ("METRO SAGRADA FAMILIA", 41.40406, 2.173935),
        ("METRO JAUME I", 41.383988, 2.178874),
        ("LA CATEDRAL DEL MAR - RUTA DEL BARRIO GOTICO", 41.383497, 2.181772),
        ("TERMINAL DE CRUCEROS", 41.362895, 2.181948),
        ("METRO DIAGONAL", 41.395839, 2.159938),
        ("LA BOQUERIA - CERRADA EN DOMINGO", 41.381939, 2.172071),
        ("CATEDRAL DE BARCELONA", 41.382326, 2.173742),
    ]
    .into_iter()
    .map(|(name, lat, lng)| GpxWaypoint { name: name.to_string(), coords: Coords::new(lat, lng) })
    .collect()
}

/// Planned walking track from the shuttle stop towards Drassanes
const TRACK: &[[f64; 2]] = &[
    [41.372324, 2.178648], [41.372887, 2.17745], [41.372917, 2.177385], [41.372972, 2.177428],
    [41.373037, 2.177476], [41.373068, 2.177503], [41.37313, 2.177367], [41.373184, 2.177454],
    [41.373252, 2.177521], [41.373263, 2.177498], [41.373271, 2.177471], [41.373342, 2.177504],
    [41.373413, 2.177503], [41.373499, 2.177467], [41.373579, 2.177382], [41.373605, 2.177352],
    [41.373643, 2.177283], [41.373674, 2.177209],
];

pub fn planned_track() -> Vec<Coords> {
    TRACK.iter().map(|[lat, lng]| Coords::new(*lat, *lng)).collect()
}

pub fn phrasebook() -> Vec<Pronunciation> {
    [
        ("Bon dia", "Bon dee-ah", "Bon día", "Buenos días"),
        ("Gràcies", "Grah-sy-es", "Gracias", "Gracias"),
        ("On es el bany?", "On es el bah-ny", "Dové el baño", "¿Dónde está el baño?"),
        ("El compte, si us plau", "El kon-te sees plaw", "La cuenta", "La cuenta, por favor"),
        ("D'acord", "Dah-kord", "De acuerdo", "De acuerdo"),
    ]
    .into_iter()
    .map(|(word, phonetic, simplified, meaning)| Pronunciation {
        word: word.to_string(),
        phonetic: phonetic.to_string(),
        simplified: simplified.to_string(),
        meaning: meaning.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_itinerary_is_sorted_with_unique_ids() {
        let entries = barcelona_itinerary();
        assert_eq!(entries.len(), 13);
        assert!(entries.windows(2).all(|w| w[0].start <= w[1].start));
        let ids: HashSet<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn test_critical_entries_are_arrival_and_boarding() {
        let critical: Vec<String> = barcelona_itinerary().into_iter().filter(|e| e.critical).map(|e| e.id).collect();
        assert_eq!(critical, vec!["1", "12"]);
    }

    #[test]
    fn test_windows_are_not_inverted() {
        assert!(barcelona_itinerary().iter().all(|e| e.start <= e.end));
    }

    #[test]
    fn test_reference_data_present() {
        assert_eq!(gpx_waypoints().len(), 14);
        assert_eq!(phrasebook().len(), 5);
        assert!(planned_track().len() > 2);
    }
}
