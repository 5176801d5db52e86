use crate::models::domain::Question;

/// Questions with no section label are grouped under this heading.
pub const DEFAULT_SECTION: &str = "General";

/// A question paired with its position in the ungrouped quiz. The index is
/// what selection and scoring are keyed on, so it must survive regrouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedQuestion<'a> {
    pub index: usize,
    pub question: &'a Question,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub label: String,
    pub questions: Vec<IndexedQuestion<'a>>,
}

pub struct SectionService;

impl SectionService {
    /// Partition an ordered question list into section buckets. Sections keep
    /// first-seen order; questions keep quiz order within their section.
    pub fn group_questions(questions: &[Question]) -> Vec<SectionGroup<'_>> {
        let mut groups: Vec<SectionGroup<'_>> = Vec::new();

        for (index, question) in questions.iter().enumerate() {
            let label = question.section.as_deref().unwrap_or(DEFAULT_SECTION);
            let entry = IndexedQuestion { index, question };

            match groups.iter_mut().find(|group| group.label == label) {
                Some(group) => group.questions.push(entry),
                None => groups.push(SectionGroup {
                    label: label.to_string(),
                    questions: vec![entry],
                }),
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::test_question;

    #[test]
    fn grouping_preserves_first_seen_section_order() {
        let questions = vec![
            test_question("q0", "A", Some("Legacy")),
            test_question("q1", "A", Some("Early life")),
            test_question("q2", "A", Some("Legacy")),
        ];

        let groups = SectionService::group_questions(&questions);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Legacy", "Early life"]);
        assert_eq!(groups[0].questions.len(), 2);
    }

    #[test]
    fn unlabeled_questions_fall_into_general() {
        let questions = vec![
            test_question("q0", "A", None),
            test_question("q1", "A", Some("History")),
        ];

        let groups = SectionService::group_questions(&questions);

        assert_eq!(groups[0].label, DEFAULT_SECTION);
        assert_eq!(groups[1].label, "History");
    }

    #[test]
    fn original_indices_are_unique_and_span_the_quiz() {
        let questions = vec![
            test_question("q0", "A", Some("B")),
            test_question("q1", "A", None),
            test_question("q2", "A", Some("A")),
            test_question("q3", "A", Some("B")),
            test_question("q4", "A", None),
        ];

        let groups = SectionService::group_questions(&questions);

        let mut indices: Vec<usize> = groups
            .iter()
            .flat_map(|g| g.questions.iter().map(|q| q.index))
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn quiz_order_is_kept_within_a_section() {
        let questions = vec![
            test_question("first", "A", Some("S")),
            test_question("middle", "A", Some("Other")),
            test_question("last", "A", Some("S")),
        ];

        let groups = SectionService::group_questions(&questions);

        let section_s = &groups[0];
        assert_eq!(section_s.questions[0].question.text, "first");
        assert_eq!(section_s.questions[1].question.text, "last");
        assert_eq!(section_s.questions[0].index, 0);
        assert_eq!(section_s.questions[1].index, 2);
    }

    #[test]
    fn grouping_empty_quiz_yields_no_groups() {
        assert!(SectionService::group_questions(&[]).is_empty());
    }
}
