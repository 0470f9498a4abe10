//! User-facing text in every supported language.
//!
//! Templates use `{name}` placeholders which callers fill with `str::replace`.

use crate::model::language::Language;

pub struct Strings {
    pub main_title: &'static str,
    /// Placeholder: `{guild}`
    pub main_description: &'static str,
    /// Stands in for `{guild}` when the server name is not known.
    pub this_server: &'static str,
    pub test_title: &'static str,
    pub test_description: &'static str,
    pub irrverbs_title: &'static str,
    pub irrverbs_description: &'static str,
    pub study_title: &'static str,
    pub study_description: &'static str,
    pub profile_title: &'static str,
    pub profile_description: &'static str,
    pub configuration_title: &'static str,
    pub configuration_description: &'static str,

    pub invite_button: &'static str,
    pub support_button: &'static str,
    pub invite_message: &'static str,

    pub pong: &'static str,

    /// Placeholder: `{language}`
    pub language_current: &'static str,
    /// Placeholder: `{language}`
    pub language_changed: &'static str,
    pub language_placeholder: &'static str,
    pub language_unknown: &'static str,

    pub missing_permission: &'static str,
    pub guild_only: &'static str,
}

static ENGLISH: Strings = Strings {
    main_title: "Thanks for adding me!",
    main_description: "Hello **{guild}**! I help you learn and revise English irregular verbs. \
        Here is a quick tour of what I can do.",
    this_server: "everyone",
    test_title: "Tests",
    test_description: "Quick tests on random irregular verbs are on their way. \
        I will announce them here when they are ready.",
    irrverbs_title: "Irregular verbs",
    irrverbs_description: "Infinitive, preterite and past participle: I will soon be able to \
        give you all three forms of any irregular verb.",
    study_title: "Study",
    study_description: "Study lists to revise at your own pace are planned next.",
    profile_title: "Profile",
    profile_description: "Once tests are available, your results will be kept so you can \
        follow your progress. Meanwhile, `/help` shows this tour and `/invite` shares me.",
    configuration_title: "Configuration",
    configuration_description: "Server managers can change the language I speak with `/language`.",

    invite_button: "Invite me",
    support_button: "Support server",
    invite_message: "Want me in another server? Use the button below.",

    pong: "Pong!",

    language_current: "I currently speak **{language}** in this server. Pick another language below.",
    language_changed: "I will now speak **{language}** in this server.",
    language_placeholder: "Choose a language",
    language_unknown: "I don't know that language.",

    missing_permission: "You need the **Manage Server** permission to do that.",
    guild_only: "This command can only be used in a server.",
};

static FRENCH: Strings = Strings {
    main_title: "Merci de m'avoir ajouté !",
    main_description: "Bonjour **{guild}** ! Je vous aide à apprendre et réviser les verbes \
        irréguliers anglais. Voici un aperçu de ce que je sais faire.",
    this_server: "à tous",
    test_title: "Tests",
    test_description: "Des tests rapides sur des verbes irréguliers au hasard arrivent bientôt. \
        Je les annoncerai ici dès qu'ils seront prêts.",
    irrverbs_title: "Verbes irréguliers",
    irrverbs_description: "Infinitif, prétérit et participe passé : je pourrai bientôt vous \
        donner les trois formes de n'importe quel verbe irrégulier.",
    study_title: "Réviser",
    study_description: "Des listes de révision à suivre à votre rythme sont prévues ensuite.",
    profile_title: "Profil",
    profile_description: "Quand les tests seront disponibles, vos résultats seront conservés \
        pour suivre votre progression. En attendant, `/help` affiche cette présentation et \
        `/invite` permet de me partager.",
    configuration_title: "Configuration",
    configuration_description: "Les gestionnaires du serveur peuvent changer ma langue avec `/language`.",

    invite_button: "M'inviter",
    support_button: "Serveur d'aide",
    invite_message: "Vous me voulez sur un autre serveur ? Utilisez le bouton ci-dessous.",

    pong: "Pong !",

    language_current: "Je parle actuellement **{language}** sur ce serveur. Choisissez une autre langue ci-dessous.",
    language_changed: "Je parle désormais **{language}** sur ce serveur.",
    language_placeholder: "Choisissez une langue",
    language_unknown: "Je ne connais pas cette langue.",

    missing_permission: "Vous avez besoin de la permission **Gérer le serveur** pour faire cela.",
    guild_only: "Cette commande ne peut être utilisée que sur un serveur.",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
    }
}
