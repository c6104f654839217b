//! 简体中文翻译 (zh-CN)

use super::keys::{
    AboutTexts, ActionTexts, CommonTexts, ContactTexts, HelpTexts, HintTexts, HomeTexts,
    JournalTexts, KeyNames, NavTexts, PortfolioTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Sharvari Joshi · 室内设计",
        back: "返回",
        close: "关闭",
        next: "下一个",
        quit: "退出",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "空格",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            navigate: "导航",
            go: "前往",
            select: "选择",
            open: "打开",
            filter: "筛选",
            scroll: "滚动",
            field: "字段",
            send: "发送",
            help: "帮助",
        },
    },

    nav: NavTexts {
        title: "章节",
        home: "首页",
        about: "关于",
        portfolio: "作品",
        journal: "随笔",
        contact: "联系",
    },

    home: HomeTexts {
        eyebrow: "室内设计师 · 软装造型师",
        view_portfolio: "查看作品",
    },

    about: AboutTexts { heading: "关于" },

    portfolio: PortfolioTexts {
        all: "全部",
        showing: "当前显示",
        no_projects: "该分类下暂无作品",
        concept: "设计理念",
        reflection: "项目回顾",
        next_project: "下一个作品",
        back_to_portfolio: "返回作品集",
    },

    journal: JournalTexts {
        no_articles: "暂无文章",
        close_button: "关闭",
        read_hint: "阅读",
    },

    contact: ContactTexts {
        email_label: "邮箱",
        name: "姓名",
        email: "邮箱",
        message: "留言",
        send: "发送留言",
    },

    help: HelpTexts {
        title: "帮助",
        global: "全局",
        portfolio: "作品",
        journal: "随笔",
        contact: "联系",
        switch_panel: "切换面板",
        move_select: "移动 / 滚动",
        open_card: "打开卡片",
        back: "返回 / 关闭",
        quit: "退出",
        filter: "上一个 / 下一个筛选",
        next_project: "下一个作品",
        close_article: "关闭文章",
        click_backdrop: "点击外部关闭",
        change_field: "上一个 / 下一个字段",
        send: "发送留言",
        close_hint: "按 Esc 关闭帮助",
    },
};
