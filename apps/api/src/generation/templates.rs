//! Template Registry — the five built-in fiche styles.
//!
//! Registration order is semantically meaningful: `list()` returns entries
//! in the order they appear in `TEMPLATES`, and that order is what clients
//! see on `GET /templates`.

/// A named fiche style: a human-readable description plus the structural
/// prompt skeleton combined with job attributes by the prompt builder.
///
/// Skeletons may contain `{title}` and `{department}` placeholders; the
/// builder substitutes them and no-ops harmlessly when they are absent.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub skeleton: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        name: "standard",
        description: "Fiche classique, neutre et professionnelle",
        skeleton: r#"# Structure
- Mission
- Profil recherché
- Compétences requises
- Conditions (contrat, localisation, salaire, avantages)
- Pour postuler

Ton : neutre, clair, inclusif."#,
    },
    Template {
        name: "startup",
        description: "Style dynamique, moderne, pour startup tech",
        skeleton: r#"# Structure
- 🚀 À propos du poste
- 💡 Mission impactante
- 🔧 Stack technique & outils
- 🌱 Profil idéal (pas besoin de tout matcher !)
- 🌟 Ce que tu apporteras
- 🏖️ Avantages & culture
- ✨ Pourquoi nous rejoindre ?

Ton : dynamique, enthousiaste, informel mais professionnel."#,
    },
    Template {
        name: "corporate",
        description: "Style formel, hiérarchisé, pour grand groupe",
        skeleton: r#"# Structure
1. Intitulé du poste
2. Direction / Entité
3. Objectifs principaux
4. Missions détaillées
5. Profil requis (diplômes, expérience)
6. Compétences techniques et comportementales
7. Conditions d’emploi (localisation, contrat, salaire, avantages)
8. Processus de recrutement

Ton : formel, structuré, précis."#,
    },
    Template {
        name: "creative",
        description: "Style original, pour métiers créatifs (design, marketing, com)",
        skeleton: r#"# Structure
- 🎨 Le poste en 1 phrase
- 🧠 Ce que tu feras au quotidien
- 🎯 Ce qu’on attend de toi
- 🧰 Tes super-pouvoirs (compétences)
- 🌈 Notre univers (culture, équipe)
- 🎁 Ce qu’on t’offre
- 📬 Viens créer avec nous !

Ton : créatif, vivant, inspirant. Utilise des emojis avec parcimonie."#,
    },
    Template {
        name: "tech",
        description: "Focus technique, pour développeurs, data, ingénieurs",
        skeleton: r#"# Structure
- Poste : Développeur(euse) {title}
- Équipe : {department}
- Stack technique
- Problèmes que tu résoudras
- Impact de ton rôle
- Expérience requise (langages, années, outils)
- Bon à savoir (code review, CI/CD, agile, etc.)
- Conditions (télétravail, horaires, salaire, stock options)

Ton : technique, précis, mais accessible. Évite le jargon excessif."#,
    },
];

/// Looks up a template by name.
pub fn get(name: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.name == name)
}

/// All templates in registration order.
pub fn list() -> &'static [Template] {
    TEMPLATES
}

/// Template names in registration order, for validation messages.
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.name).collect()
}
