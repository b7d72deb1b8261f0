//! Prompt Builder — turns a validated `JobRequest` plus its resolved
//! `Template` into the single prompt string sent to the completion service.
//!
//! Pure and deterministic: identical input yields a byte-identical prompt.
//! No escaping happens here; the output is plain text, not HTML.

use crate::generation::templates::Template;
use crate::models::job::JobRequest;

/// Fixed wording for the information block, selected by output language.
/// The fr variants are the original French literals; en mirrors them.
struct BlockLabels {
    heading: &'static str,
    title: &'static str,
    department: &'static str,
    seniority: &'static str,
    location: &'static str,
    contract: &'static str,
    skills: &'static str,
    benefits: &'static str,
    salary_prefix: &'static str,
    company_prefix: &'static str,
    policies_prefix: &'static str,
    language: &'static str,
    length: &'static str,
    department_fallback: &'static str,
    skills_fallback: &'static str,
    benefits_fallback: &'static str,
}

const FR: BlockLabels = BlockLabels {
    heading: "**Informations fournies :**",
    title: "Poste",
    department: "Département",
    seniority: "Niveau",
    location: "Localisation",
    contract: "Contrat",
    skills: "Compétences clés",
    benefits: "Avantages",
    salary_prefix: "Rémunération",
    company_prefix: "Contexte entreprise",
    policies_prefix: "Politiques RH",
    language: "**Langue :**",
    length: "**Longueur :**",
    department_fallback: "non spécifié",
    skills_fallback: "À définir",
    benefits_fallback: "Non spécifiés",
};

const EN: BlockLabels = BlockLabels {
    heading: "**Provided information:**",
    title: "Position",
    department: "Department",
    seniority: "Seniority",
    location: "Location",
    contract: "Contract",
    skills: "Key skills",
    benefits: "Benefits",
    salary_prefix: "Salary band",
    company_prefix: "Company context",
    policies_prefix: "HR policies",
    language: "**Language:**",
    length: "**Length:**",
    department_fallback: "unspecified",
    skills_fallback: "to be defined",
    benefits_fallback: "not specified",
};

fn labels_for(language: &str) -> &'static BlockLabels {
    match language {
        "en" => &EN,
        _ => &FR,
    }
}

/// Builds the full prompt: skeleton with placeholders substituted, the
/// fixed information block, then trailing language/length directives.
pub fn build_prompt(job: &JobRequest, template: &Template) -> String {
    let labels = labels_for(&job.language);

    let department = if job.department.is_empty() {
        labels.department_fallback
    } else {
        job.department.as_str()
    };

    // No-ops harmlessly for skeletons without placeholders.
    let instructions = template
        .skeleton
        .replace("{title}", &job.title)
        .replace("{department}", department);

    let skills = if job.key_skills.is_empty() {
        labels.skills_fallback.to_string()
    } else {
        job.key_skills.join(", ")
    };
    let benefits = if job.benefits.is_empty() {
        labels.benefits_fallback.to_string()
    } else {
        job.benefits.join(", ")
    };

    let mut extras = String::new();
    if !job.salary_band.is_empty() {
        extras.push_str(&format!("{} : {}. ", labels.salary_prefix, job.salary_band));
    }
    if !job.company_context.is_empty() {
        extras.push_str(&format!(
            "{} : {}. ",
            labels.company_prefix, job.company_context
        ));
    }
    if !job.policies.is_empty() {
        extras.push_str(&format!("{} : {}. ", labels.policies_prefix, job.policies));
    }

    format!(
        "{instructions}\n\n\
         {heading}\n\
         - {title_label} : {title}\n\
         - {department_label} : {department}\n\
         - {seniority_label} : {seniority}\n\
         - {location_label} : {location}\n\
         - {contract_label} : {contract}\n\
         - {skills_label} : {skills}\n\
         - {benefits_label} : {benefits}\n\
         {extras}\n\n\
         {language_label} {language}\n\
         {length_label} {length}",
        heading = labels.heading,
        title_label = labels.title,
        title = job.title,
        department_label = labels.department,
        seniority_label = labels.seniority,
        seniority = job.seniority,
        location_label = labels.location,
        location = job.location,
        contract_label = labels.contract,
        contract = job.contract_type,
        skills_label = labels.skills,
        benefits_label = labels.benefits,
        language_label = labels.language,
        language = job.language,
        length_label = labels.length,
        length = job.length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::templates;

    fn request(json: serde_json::Value) -> JobRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_tech_skeleton_placeholders_substituted() {
        let job = request(serde_json::json!({
            "title": "Backend Engineer",
            "department": "",
            "seniority": "junior",
            "language": "en",
            "template": "tech"
        }));
        let template = templates::get("tech").unwrap();
        let prompt = build_prompt(&job, template);

        assert!(prompt.contains("Développeur(euse) Backend Engineer"));
        assert!(prompt.contains("Équipe : unspecified"));
        assert!(!prompt.contains("{title}"));
        assert!(!prompt.contains("{department}"));
    }

    #[test]
    fn test_empty_department_never_renders_empty_in_block() {
        let job = request(serde_json::json!({
            "title": "Data Analyst",
            "language": "fr",
            "template": "standard"
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(prompt.contains("- Département : non spécifié"));
    }

    #[test]
    fn test_substitution_noops_on_placeholder_free_skeleton() {
        let job = request(serde_json::json!({
            "title": "Designer",
            "template": "creative"
        }));
        let template = templates::get("creative").unwrap();
        let prompt = build_prompt(&job, template);
        assert!(prompt.starts_with(template.skeleton));
    }

    #[test]
    fn test_skills_and_benefits_fallbacks() {
        let job = request(serde_json::json!({
            "title": "Designer",
            "language": "fr"
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(prompt.contains("Compétences clés : À définir"));
        assert!(prompt.contains("Avantages : Non spécifiés"));

        let job = request(serde_json::json!({
            "title": "Designer",
            "language": "en",
            "key_skills": ["Figma", "Illustrator"],
            "benefits": ["remote work"]
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(prompt.contains("Key skills : Figma, Illustrator"));
        assert!(prompt.contains("Benefits : remote work"));
    }

    #[test]
    fn test_optional_clauses_only_when_non_empty() {
        let job = request(serde_json::json!({
            "title": "Designer",
            "language": "fr"
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(!prompt.contains("Rémunération"));
        assert!(!prompt.contains("Contexte entreprise"));
        assert!(!prompt.contains("Politiques RH"));

        let job = request(serde_json::json!({
            "title": "Designer",
            "language": "fr",
            "salary_band": "45-55k€",
            "company_context": "scale-up de 80 personnes",
            "policies": "télétravail 3j/semaine"
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(prompt.contains("Rémunération : 45-55k€."));
        assert!(prompt.contains("Contexte entreprise : scale-up de 80 personnes."));
        assert!(prompt.contains("Politiques RH : télétravail 3j/semaine."));
    }

    #[test]
    fn test_trailing_language_and_length_directives() {
        let job = request(serde_json::json!({
            "title": "Designer",
            "language": "en",
            "length": "short"
        }));
        let prompt = build_prompt(&job, templates::get("standard").unwrap());
        assert!(prompt.ends_with("**Language:** en\n**Length:** short"));
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let job = request(serde_json::json!({
            "title": "Backend Engineer",
            "department": "Platform",
            "seniority": "senior",
            "language": "fr",
            "key_skills": ["Rust", "PostgreSQL"],
            "template": "tech"
        }));
        let template = templates::get("tech").unwrap();
        assert_eq!(build_prompt(&job, template), build_prompt(&job, template));
    }
}
