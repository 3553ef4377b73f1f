//! Static quote pools and per-category display metadata. Read-only; the
//! core depends on this module only through `pool` and `meta`.

use crate::models::Category;

/// Display descriptor consumed by the presentation shell.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    /// Accent hint for the shell (named color, not a style system).
    pub accent: &'static str,
}

const JOY_META: CategoryMeta = CategoryMeta {
    label: "Joy",
    icon: "😊",
    title: "喜悦时刻",
    accent: "yellow",
};

const ANGER_META: CategoryMeta = CategoryMeta {
    label: "Anger",
    icon: "😤",
    title: "平心静气",
    accent: "red",
};

const SORROW_META: CategoryMeta = CategoryMeta {
    label: "Sorrow",
    icon: "😢",
    title: "温柔安慰",
    accent: "blue",
};

const FEAR_META: CategoryMeta = CategoryMeta {
    label: "Fear",
    icon: "😨",
    title: "勇气补给",
    accent: "purple",
};

const BIRTHDAY_META: CategoryMeta = CategoryMeta {
    label: "Birthday",
    icon: "🎂",
    title: "生日祝福",
    accent: "pink",
};

const ANSWERS_META: CategoryMeta = CategoryMeta {
    label: "Answers",
    icon: "📖",
    title: "答案之书",
    accent: "stone",
};

const JOY_POOL: &[&str] = &[
    "愿你的笑容像今天的阳光一样灿烂。",
    "快乐不需要理由，此刻就值得庆祝。",
    "把喜悦分享出去，它会翻倍回来。",
    "今天也要记得为小事开心一下。",
    "你开心的样子，真的很好看。",
    "生活偶尔会甜过预期，比如现在。",
    "愿你眼里常有光，心里常有糖。",
    "值得高兴的事正在路上，先笑为敬。",
];

const ANGER_POOL: &[&str] = &[
    "深呼吸，没有什么值得你气坏自己。",
    "生气是拿别人的错误惩罚自己。",
    "先冷静十秒，再决定要不要计较。",
    "你已经做得很好了，别跟烂事较劲。",
    "把火气写下来，然后撕掉它。",
    "世界很吵，但你可以选择安静。",
    "不值得的人和事，不配占用你的情绪。",
    "风会带走怒气，留下清醒的你。",
];

const SORROW_POOL: &[&str] = &[
    "难过的时候，允许自己慢下来。",
    "眼泪不是软弱，是心在认真生活。",
    "一切都会过去的，包括此刻的阴天。",
    "你不需要立刻好起来，慢慢来。",
    "抱抱你，今天辛苦了。",
    "悲伤是爱的另一种形状。",
    "夜再长，天总会亮的。",
    "没关系的，有我在听。",
];

const FEAR_POOL: &[&str] = &[
    "勇气不是不害怕，而是害怕也往前走。",
    "你比自己想象的要强大得多。",
    "未知的门后，也可能是惊喜。",
    "迈出一小步，恐惧就退一大步。",
    "担心的事，九成都不会发生。",
    "深呼吸，你可以的。",
    "害怕说明你在认真对待，这不是坏事。",
    "路会在脚下出现，先走起来。",
];

const BIRTHDAY_POOL: &[&str] = &[
    "生日快乐！愿新的一岁温柔且闪亮。",
    "愿你被这个世界温柔以待，年年如是。",
    "又长大一岁，愿你依然保有少年气。",
    "祝你的愿望全部实现，一个不落。",
    "新的一岁，去见想见的人，做想做的事。",
    "愿你的生活像生日蛋糕一样甜。",
    "生日快乐，谢谢你来到这个世界。",
    "愿往后的每一天，都值得庆祝。",
    "吹灭蜡烛的那一刻，好运已经启程。",
    "愿时光慢些走，愿你一直快乐。",
];

const ANSWERS_POOL: &[&str] = &[
    "是的。",
    "不。",
    "耐心等待，时机未到。",
    "相信你的直觉。",
    "去做吧，别犹豫。",
    "再想一想。",
    "答案就在你心里。",
    "放手，会有更好的。",
    "值得一试。",
    "现在还不是时候。",
    "问问你最信任的人。",
    "顺其自然。",
];

pub fn pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Joy => JOY_POOL,
        Category::Anger => ANGER_POOL,
        Category::Sorrow => SORROW_POOL,
        Category::Fear => FEAR_POOL,
        Category::Birthday => BIRTHDAY_POOL,
        Category::Answers => ANSWERS_POOL,
    }
}

pub fn meta(category: Category) -> &'static CategoryMeta {
    match category {
        Category::Joy => &JOY_META,
        Category::Anger => &ANGER_META,
        Category::Sorrow => &SORROW_META,
        Category::Fear => &FEAR_META,
        Category::Birthday => &BIRTHDAY_META,
        Category::Answers => &ANSWERS_META,
    }
}
