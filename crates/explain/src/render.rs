//! Sentence templates.

use crate::label::{property_phrase, uri_label};
use properties::local_name;

/// Clause for one selected object, keyed by the property's local name
pub fn clause(predicate: &str, object: &str, titles: &[String]) -> String {
    let label = uri_label(object);
    let titles = join_with_and(titles, ", ");
    let property = local_name(predicate);

    match property {
        "subject" => format!("{} such as {}", label, titles),
        "cinematography" | "editing" => format!("the {} of {} of {}", property, label, titles),
        "producer" | "director" | "distributor" => {
            format!("the {} {} of {}", property, label, titles)
        }
        "musicComposer" => format!("{} {} of {}", property_phrase(predicate), label, titles),
        _ => format!("films {} {} like {}", property, label, titles),
    }
}

/// `a`, `a and b`, `a<sep>b and c`, ...
pub fn join_with_and(items: &[String], separator: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(separator), last),
    }
}

/// Full sentence from the rendered clauses
pub fn sentence(clauses: &[String], recommended_title: &str) -> String {
    let characteristic = if clauses.len() > 1 {
        "characteristics"
    } else {
        "characteristic"
    };
    format!(
        "Because you like {}, watch \"{}\" that shares the same {}.",
        join_with_and(clauses, "; "),
        recommended_title,
        characteristic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_with_and() {
        assert_eq!(join_with_and(&titles(&[]), ", "), "");
        assert_eq!(join_with_and(&titles(&["Heat"]), ", "), "Heat");
        assert_eq!(join_with_and(&titles(&["Heat", "Thief"]), ", "), "Heat and Thief");
        assert_eq!(
            join_with_and(&titles(&["Heat", "Thief", "Collateral"]), ", "),
            "Heat, Thief and Collateral"
        );
    }

    #[test]
    fn test_templates() {
        let t = titles(&["Heat"]);
        assert_eq!(
            clause(
                "http://purl.org/dc/terms/subject",
                "http://dbpedia.org/resource/Category:Heist_films",
                &t
            ),
            "Heist films such as Heat"
        );
        assert_eq!(
            clause(
                "http://dbpedia.org/ontology/cinematography",
                "http://dbpedia.org/resource/Dante_Spinotti",
                &t
            ),
            "the cinematography of Dante Spinotti of Heat"
        );
        assert_eq!(
            clause(
                "http://dbpedia.org/ontology/director",
                "http://dbpedia.org/resource/Michael_Mann",
                &t
            ),
            "the director Michael Mann of Heat"
        );
        assert_eq!(
            clause(
                "http://dbpedia.org/ontology/musicComposer",
                "http://dbpedia.org/resource/Elliot_Goldenthal",
                &t
            ),
            "music composer Elliot Goldenthal of Heat"
        );
        assert_eq!(
            clause(
                "http://dbpedia.org/ontology/starring",
                "http://dbpedia.org/resource/Al_Pacino",
                &t
            ),
            "films starring Al Pacino like Heat"
        );
    }

    #[test]
    fn test_sentence_pluralisation() {
        let one = sentence(&titles(&["the director Michael Mann of Heat"]), "Thief");
        assert_eq!(
            one,
            "Because you like the director Michael Mann of Heat, watch \"Thief\" that shares the same characteristic."
        );

        let many = sentence(&titles(&["x", "y", "z"]), "Thief");
        assert_eq!(
            many,
            "Because you like x; y and z, watch \"Thief\" that shares the same characteristics."
        );
    }
}
