//! Section extraction: partitions completion text into labeled resume sections.
//!
//! The scan is a small state machine. Each line may switch the current
//! section when it contains a trigger substring; lines then accumulate into
//! whichever section is active. Trigger matching is substring-based and
//! resolved by table order, so a line containing several triggers routes to
//! the first entry that matches.

use serde::{Deserialize, Serialize};

/// One of the seven fixed resume categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Name,
    ContactInformation,
    Skills,
    Education,
    WorkExperience,
    Certifications,
    Languages,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Name,
        Section::ContactInformation,
        Section::Skills,
        Section::Education,
        Section::WorkExperience,
        Section::Certifications,
        Section::Languages,
    ];

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Name => "Name",
            Section::ContactInformation => "Contact Information",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::WorkExperience => "Work Experience",
            Section::Certifications => "Certifications",
            Section::Languages => "Languages",
        }
    }
}

/// Ordered transition table: the first trigger contained in a lowercased line
/// wins. Order matters and is part of the contract; `name` before `contact
/// information` means a "Contact Name" line routes to `Name`.
const TRIGGERS: &[(&str, Section)] = &[
    ("name", Section::Name),
    ("contact information", Section::ContactInformation),
    ("skills", Section::Skills),
    ("education", Section::Education),
    ("work experience", Section::WorkExperience),
    ("certifications", Section::Certifications),
    ("languages", Section::Languages),
];

/// The seven accumulated section texts, serialized with camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSections {
    pub name: String,
    pub contact_information: String,
    pub skills: String,
    pub education: String,
    pub work_experience: String,
    pub certifications: String,
    pub languages: String,
}

impl ResumeSections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Name => &self.name,
            Section::ContactInformation => &self.contact_information,
            Section::Skills => &self.skills,
            Section::Education => &self.education,
            Section::WorkExperience => &self.work_experience,
            Section::Certifications => &self.certifications,
            Section::Languages => &self.languages,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Name => &mut self.name,
            Section::ContactInformation => &mut self.contact_information,
            Section::Skills => &mut self.skills,
            Section::Education => &mut self.education,
            Section::WorkExperience => &mut self.work_experience,
            Section::Certifications => &mut self.certifications,
            Section::Languages => &mut self.languages,
        }
    }
}

/// Partition completion text into the seven fixed sections.
///
/// Pure function of its input. Lines are taken as-is (no trimming before the
/// split); a header line's own text lands in the section it opens. Lines seen
/// before any trigger has matched are dropped. Each accumulated field is
/// trimmed at the end.
pub fn extract_sections(text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut current: Option<Section> = None;

    for line in text.split('\n') {
        let lower = line.to_lowercase();
        if let Some((_, section)) = TRIGGERS.iter().find(|(kw, _)| lower.contains(kw)) {
            current = Some(*section);
        }
        if let Some(section) = current {
            let field = sections.get_mut(section);
            field.push_str(line);
            field.push(' ');
        }
    }

    for section in Section::ALL {
        let field = sections.get_mut(section);
        *field = field.trim().to_string();
    }
    sections
}
