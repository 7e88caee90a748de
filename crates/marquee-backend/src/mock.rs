//! Built-in catalog data served while the remote catalog is disabled.
//!
//! Mock data is the authoritative catalog contract for this client; the
//! live endpoints are only consulted when `use_mock_catalog` is off.

use marquee_bridge::movie::{CatalogSection, Movie};

struct MockMovie {
    id: u64,
    title: &'static str,
    overview: &'static str,
    release_date: &'static str,
    vote_average: f64,
}

const POPULAR: &[MockMovie] = &[
    MockMovie {
        id: 1,
        title: "Inception",
        overview: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        release_date: "2010-07-16",
        vote_average: 8.4,
    },
    MockMovie {
        id: 2,
        title: "The Shawshank Redemption",
        overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        release_date: "1994-09-23",
        vote_average: 8.7,
    },
    MockMovie {
        id: 3,
        title: "The Dark Knight",
        overview: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        release_date: "2008-07-18",
        vote_average: 8.5,
    },
    MockMovie {
        id: 4,
        title: "Pulp Fiction",
        overview: "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        release_date: "1994-10-14",
        vote_average: 8.5,
    },
    MockMovie {
        id: 5,
        title: "The Matrix",
        overview: "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        release_date: "1999-03-31",
        vote_average: 8.1,
    },
    MockMovie {
        id: 6,
        title: "Interstellar",
        overview: "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        release_date: "2014-11-07",
        vote_average: 8.3,
    },
];

const TOP_RATED: &[MockMovie] = &[
    MockMovie {
        id: 7,
        title: "The Godfather",
        overview: "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        release_date: "1972-03-24",
        vote_average: 8.7,
    },
    MockMovie {
        id: 8,
        title: "Schindler's List",
        overview: "In German-occupied Poland during World War II, industrialist Oskar Schindler gradually becomes concerned for his Jewish workforce after witnessing their persecution by the Nazis.",
        release_date: "1993-12-15",
        vote_average: 8.6,
    },
    MockMovie {
        id: 9,
        title: "The Lord of the Rings: The Return of the King",
        overview: "Gandalf and Aragorn lead the World of Men against Sauron's army to draw his gaze from Frodo and Sam as they approach Mount Doom with the One Ring.",
        release_date: "2003-12-17",
        vote_average: 8.5,
    },
    MockMovie {
        id: 10,
        title: "Fight Club",
        overview: "An insomniac office worker and a devil-may-care soapmaker form an underground fight club that evolves into something much, much more.",
        release_date: "1999-10-15",
        vote_average: 8.4,
    },
];

const UPCOMING: &[MockMovie] = &[
    MockMovie {
        id: 11,
        title: "Dune: Part Two",
        overview: "Follow the mythic journey of Paul Atreides as he unites with Chani and the Fremen while on a path of revenge against the conspirators who destroyed his family.",
        release_date: "2024-03-01",
        vote_average: 8.2,
    },
    MockMovie {
        id: 12,
        title: "The Batman 2",
        overview: "The sequel to Matt Reeves's The Batman, continuing the story of Robert Pattinson's caped crusader.",
        release_date: "2025-10-03",
        vote_average: 0.0,
    },
    MockMovie {
        id: 13,
        title: "Mission: Impossible 8",
        overview: "The eighth installment in the Mission: Impossible film series.",
        release_date: "2025-05-23",
        vote_average: 0.0,
    },
    MockMovie {
        id: 14,
        title: "Avatar 3",
        overview: "The third installment in the Avatar franchise, continuing the story of the Na'vi and the human exploration of Pandora.",
        release_date: "2025-12-19",
        vote_average: 0.0,
    },
];

/// Returns the built-in movies for one catalog section.
pub fn catalog(section: CatalogSection) -> Vec<Movie> {
    let records = match section {
        CatalogSection::Popular => POPULAR,
        CatalogSection::TopRated => TOP_RATED,
        CatalogSection::Upcoming => UPCOMING,
    };
    records
        .iter()
        .map(|m| Movie {
            id: m.id,
            title: m.title.to_string(),
            overview: m.overview.to_string(),
            release_date: Some(m.release_date.to_string()),
            vote_average: Some(m.vote_average),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_disjoint_and_nonempty() {
        let mut seen = std::collections::HashSet::new();
        for section in CatalogSection::all() {
            let movies = catalog(section);
            assert!(!movies.is_empty());
            for movie in movies {
                assert!(seen.insert(movie.id), "duplicate mock id {}", movie.id);
            }
        }
    }
}
