//! Fixed in-memory content for the showcase.

/// One experience entry shown in the detail modal.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub slides: &'static [&'static str],
}

/// Lookup table of experience entries, keyed by category.
#[derive(Debug, Clone)]
pub struct ExperienceLibrary {
    entries: &'static [ExperienceEntry],
}

impl ExperienceLibrary {
    /// Entry for a category key; unknown keys return `None` and the caller
    /// simply does not open the modal.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ExperienceEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Entry by display order.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&ExperienceEntry> {
        self.entries.get(index)
    }

    /// All entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &'static [ExperienceEntry] {
        self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The showcase's experience table.
#[must_use]
pub fn experience_library() -> ExperienceLibrary {
    ExperienceLibrary {
        entries: &[
            ExperienceEntry {
                key: "kindergarten",
                title: "Kindergarten Teaching",
                description: "Classroom teaching and early childhood education, \
                              building foundational literacy and numeracy through play.",
                slides: &[
                    "Morning circle: songs, calendar, and weather chart with the class.",
                    "Phonics stations rotating in small groups of four.",
                    "End-of-term showcase where every child presents one craft.",
                ],
            },
            ExperienceEntry {
                key: "tutoring",
                title: "Private Tutoring",
                description: "One-on-one tutoring in mathematics and English, \
                              tailored to each student's pace and goals.",
                slides: &[
                    "Diagnostic first session mapping strengths and gaps.",
                    "Weekly problem sets reviewed together line by line.",
                    "Exam preparation with timed past-paper drills.",
                ],
            },
            ExperienceEntry {
                key: "activities",
                title: "Extracurricular Activities",
                description: "Organizing clubs, field trips, and competitions \
                              that keep learning going outside the classroom.",
                slides: &[
                    "Science club building bottle rockets on the sports field.",
                    "Inter-school spelling bee, two years running.",
                    "Museum field trip with a scavenger-hunt worksheet.",
                ],
            },
        ],
    }
}

/// A testimonial quote for the testimonials carousel.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
}

/// The showcase's testimonial list.
#[must_use]
pub fn testimonials() -> &'static [Testimonial] {
    &[
        Testimonial {
            author: "A. Rahman",
            quote: "Patient, structured, and genuinely invested in my son's progress.",
        },
        Testimonial {
            author: "C. Lim",
            quote: "Our daughter went from dreading maths to asking for extra sets.",
        },
        Testimonial {
            author: "J. Tan",
            quote: "The weekly summaries made it easy to see what was improving.",
        },
        Testimonial {
            author: "M. Ibrahim",
            quote: "Flexible with scheduling and always prepared for every session.",
        },
        Testimonial {
            author: "S. Wong",
            quote: "Clear explanations and a lot of encouragement. Highly recommended.",
        },
    ]
}

/// Titles cycled by the home screen typewriter.
#[must_use]
pub fn typewriter_titles() -> &'static [&'static str] {
    &["Educator", "Private Tutor", "Lifelong Learner"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let library = experience_library();
        assert!(library.get("kindergarten").is_some());
        assert!(library.get("tutoring").is_some());
        assert!(library.get("activities").is_some());
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(experience_library().get("gardening").is_none());
    }

    #[test]
    fn every_entry_has_slides() {
        for entry in experience_library().entries() {
            assert!(!entry.slides.is_empty(), "{} has no slides", entry.key);
        }
    }
}
