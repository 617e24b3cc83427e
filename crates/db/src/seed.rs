//! Example records a collection can start with.

use crate::models::movie::Movie;

/// Three sample movies with ids 1 to 3.
///
/// Seeded records are not run through the creation rules; some overviews
/// are longer than a created movie may be.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 1,
            title: "The Substance".into(),
            overview: "'Tú, pero mejor en todos los sentidos'".into(),
            year: 2024,
            rating: 7.2,
            category: "Ciencia Ficción".into(),
        },
        Movie {
            id: 2,
            title: "The Fall: El sueño de Alexandria".into(),
            overview: "Hollywood, años veinte. Tras una desafortunada caída, un especialista \
                       en secuencias de acción es ingresado en un hospital"
                .into(),
            year: 2006,
            rating: 7.0,
            category: "Fantástico".into(),
        },
        Movie {
            id: 3,
            title: "Aftersun".into(),
            overview: "Sophie reflexiona sobre la alegría compartida y la melancolía privada \
                       de unas vacaciones que hizo con su padre 20 años atrás"
                .into(),
            year: 2022,
            rating: 7.2,
            category: "Drama".into(),
        },
    ]
}
