//! 英文翻译 (en-US)

use super::keys::{
    AboutTexts, ActionTexts, CommonTexts, ContactTexts, HelpTexts, HintTexts, HomeTexts,
    JournalTexts, KeyNames, NavTexts, PortfolioTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Sharvari Joshi · Interior Design",
        back: "Back",
        close: "Close",
        next: "Next",
        quit: "Quit",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            switch_panel: "Switch panel",
            navigate: "Navigate",
            go: "Go",
            select: "Select",
            open: "Open",
            filter: "Filter",
            scroll: "Scroll",
            field: "Field",
            send: "Send",
            help: "Help",
        },
    },

    nav: NavTexts {
        title: "Sections",
        home: "Home",
        about: "About",
        portfolio: "Portfolio",
        journal: "Journal",
        contact: "Contact",
    },

    home: HomeTexts {
        eyebrow: "Interior Designer & Stylist",
        view_portfolio: "View Portfolio",
    },

    about: AboutTexts { heading: "About" },

    portfolio: PortfolioTexts {
        all: "All",
        showing: "Showing",
        no_projects: "No projects in this category",
        concept: "Concept",
        reflection: "Reflection",
        next_project: "Next project",
        back_to_portfolio: "Back to portfolio",
    },

    journal: JournalTexts {
        no_articles: "No articles yet",
        close_button: "Close",
        read_hint: "Read",
    },

    contact: ContactTexts {
        email_label: "Email",
        name: "Name",
        email: "Email",
        message: "Message",
        send: "Send Message",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global",
        portfolio: "Portfolio",
        journal: "Journal",
        contact: "Contact",
        switch_panel: "Switch panel",
        move_select: "Move / scroll",
        open_card: "Open card",
        back: "Back / close",
        quit: "Quit",
        filter: "Previous / next filter",
        next_project: "Next project",
        close_article: "Close article",
        click_backdrop: "Click outside to close",
        change_field: "Previous / next field",
        send: "Send message",
        close_hint: "Press Esc to close the help",
    },
};
