//! User-facing strings. Arabic is the primary language of the app.

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

const ARABIC_EXAMPLES: [&str; 5] = [
    "حل المعادلة 3س + 5 = 20",
    "كم ثانية في اليوم؟",
    "تحويل 50 درجة مئوية لفهرنهايت",
    "مساحة مثلث قاعدته 5 وارتفاعه 10",
    "15% من 1500",
];

const ENGLISH_EXAMPLES: [&str; 5] = [
    "Solve 3x + 5 = 20",
    "How many seconds are in a day?",
    "Convert 50 Celsius to Fahrenheit",
    "Area of a triangle with base 5 and height 10",
    "15% of 1500",
];

impl Locale {
    /// Parse a language code such as `ar`, `en` or `ar-SA`
    pub fn from_str(s: &str) -> Option<Self> {
        let lang = s.trim().to_lowercase();
        let primary = lang.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "ar" | "arabic" => Some(Self::Arabic),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// BCP-47 tag handed to the speech recognizer
    pub fn speech_lang(&self) -> &'static str {
        match self {
            Self::Arabic => "ar-SA",
            Self::English => "en-US",
        }
    }

    /// Shown in place of an answer whenever a solve fails, whatever the cause
    pub fn solve_failed(&self) -> &'static str {
        match self {
            Self::Arabic => "عذراً، حدث خطأ غير متوقع. يرجى المحاولة مرة أخرى.",
            Self::English => "Sorry, an unexpected error occurred. Please try again.",
        }
    }

    pub fn voice_unsupported(&self) -> &'static str {
        match self {
            Self::Arabic => "عذراً، المتصفح لا يدعم الكتابة بالصوت.",
            Self::English => "Sorry, voice typing is not supported here.",
        }
    }

    pub fn history_title(&self) -> &'static str {
        match self {
            Self::Arabic => "السجل",
            Self::English => "History",
        }
    }

    pub fn history_empty(&self) -> &'static str {
        match self {
            Self::Arabic => "لا يوجد سجل عمليات",
            Self::English => "No calculations yet",
        }
    }

    pub fn assistant_title(&self) -> &'static str {
        match self {
            Self::Arabic => "المساعد الذكي",
            Self::English => "Smart Assistant",
        }
    }

    pub fn answer_title(&self) -> &'static str {
        match self {
            Self::Arabic => "الإجابة",
            Self::English => "Answer",
        }
    }

    pub fn examples_title(&self) -> &'static str {
        match self {
            Self::Arabic => "أمثلة",
            Self::English => "Examples",
        }
    }

    pub fn prompt_hint(&self) -> &'static str {
        match self {
            Self::Arabic => "اكتب مسألتك هنا...",
            Self::English => "Type your math problem here...",
        }
    }

    pub fn assistant_intro(&self) -> &'static str {
        match self {
            Self::Arabic => "اسأل الذكاء الاصطناعي عن أي مسألة رياضية معقدة، تحويلات، أو شرح للمعادلات.",
            Self::English => "Ask the AI about any complex math problem, conversion or equation.",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Self::Arabic => "جاري التفكير...",
            Self::English => "Thinking...",
        }
    }

    pub fn listening(&self) -> &'static str {
        match self {
            Self::Arabic => "جاري الاستماع...",
            Self::English => "Listening...",
        }
    }

    pub fn import_label(&self) -> &'static str {
        match self {
            Self::Arabic => "نسخ الرقم/العملية إلى الحاسبة",
            Self::English => "Copy number/expression to calculator",
        }
    }

    pub fn nothing_to_import(&self) -> &'static str {
        match self {
            Self::Arabic => "لا توجد أرقام للاستيراد",
            Self::English => "Nothing to import",
        }
    }

    /// Suggested prompts shown in the AI panel
    pub fn examples(&self) -> &'static [&'static str; 5] {
        match self {
            Self::Arabic => &ARABIC_EXAMPLES,
            Self::English => &ENGLISH_EXAMPLES,
        }
    }
}
