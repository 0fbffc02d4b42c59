use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Uniformly-random template selection with a seedable constructor so
/// scenario tests can pin deterministic output.
pub struct TemplatePicker {
    rng: Mutex<StdRng>,
}

impl TemplatePicker {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn choose<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        let mut rng = self.rng.lock().expect("picker lock poisoned");
        items.choose(&mut *rng).map(|s| s.as_str())
    }
}

impl Default for TemplatePicker {
    fn default() -> Self {
        Self::new()
    }
}

/// The assistant's personality: who it is, who it talks to, and the canned
/// Persian content every non-generative reply is built from.
#[derive(Debug, Clone)]
pub struct Persona {
    pub assistant_name: String,
    pub companion_name: String,
    pub movie_suggestions: Vec<String>,
    pub music_suggestions: Vec<String>,
    pub conversation_templates: Vec<String>,
    pub jokes: Vec<String>,
}

impl Persona {
    pub fn new(assistant_name: impl Into<String>, companion_name: impl Into<String>) -> Self {
        let assistant_name = assistant_name.into();
        let companion_name = companion_name.into();
        let name = companion_name.as_str();

        let movie_suggestions = vec![
            "فیلم 'خانه پدری' ساخته کیانوش عیاری".to_string(),
            "فیلم 'درباره الی' اصغر فرهادی".to_string(),
            "فیلم 'جدایی نادر از سیمین'".to_string(),
            "فیلم 'فروشنده' اصغر فرهادی".to_string(),
            "فیلم 'مادر' علی حاتمی".to_string(),
        ];

        let music_suggestions = vec![
            "آهنگ 'دیره' محسن یگانه".to_string(),
            "آهنگ 'نگاه' محسن چاوشی".to_string(),
            "آهنگ 'بهت قول میدم' آرون افشار".to_string(),
            "آهنگ 'دل' حامید حامی".to_string(),
            "آهنگ 'عاشقانه' محسن ابراهیم زاده".to_string(),
        ];

        let conversation_templates = vec![
            format!("{name} جان، حرفت خیلی جالب بود!"),
            format!("{name}، من همیشه اینجام که باهات حرف بزنم."),
            format!("از این حرفت خوشم اومد، {name}!"),
            format!("{name} عزیزم، چه خبر؟"),
            format!("همیشه دوست دارم باهات گپ بزنم، {name} جان!"),
        ];

        let jokes = vec![
            format!("{name} جان، چرا اژدها از همه جدا شد؟ چون همش آتیش می‌سوزوند! 😂"),
            format!("{name} عزیز، چرا شترمرغ سرشو کرد تو خاک؟ فکر کرد داره استوری می‌ذاره! 📱"),
            format!("{name} جان، چرا کامپیوتر به دکتر رفت؟ چون ویروس گرفته بود! 💻"),
            format!("{name} عزیز، چرا کتاب درس خوابش نمی‌برد؟ چون پر از کابوس بود! 📚"),
            format!("{name} جان، چرا تلفن همیشه مودب بود؟ چون همیشه می‌گفت الو! 📞"),
        ];

        Self {
            assistant_name,
            companion_name,
            movie_suggestions,
            music_suggestions,
            conversation_templates,
            jokes,
        }
    }

    /// Persona-prefixed prompt submitted to the generative-AI provider
    pub fn chat_prompt(&self, message: &str) -> String {
        format!(
            "تو {assistant} هستی و داری با همسرت {companion} حرف می‌زنی. پاسخت باید:\n\
             - به فارسی باشه\n\
             - گرم و صمیمی باشه\n\
             - با خطاب '{companion} جان' یا '{companion}' شروع شه\n\
             - کوتاه و مفید باشه (حداکثر 100 کلمه)\n\n\
             پیام {companion}: {message}\n\n\
             پاسخ {assistant}:",
            assistant = self.assistant_name,
            companion = self.companion_name,
            message = message,
        )
    }

    /// Reply wrapping a movie suggestion
    pub fn movie_reply(&self, suggestion: &str) -> String {
        format!(
            "{} جان، {} رو پیشنهاد می‌دم! خیلی قشنگه 🎬",
            self.companion_name, suggestion
        )
    }

    /// Reply wrapping a music suggestion
    pub fn music_reply(&self, suggestion: &str) -> String {
        format!(
            "{} جان، {} رو گوش کن، فوق‌العادست! 🎵",
            self.companion_name, suggestion
        )
    }

    pub fn greeting_reply(&self) -> String {
        format!("سلام {} جان! چطوری عزیزم؟ 😊", self.companion_name)
    }

    pub fn well_being_reply(&self) -> String {
        format!(
            "{} جان، من عالیم! تو چطوری؟ امیدوارم حالت خوب باشه 💕",
            self.companion_name
        )
    }

    pub fn affection_reply(&self) -> String {
        format!("{} جان، منم عاشقتم! ❤️", self.companion_name)
    }

    pub fn question_reply(&self) -> String {
        format!(
            "{} جان، سؤال جالبی پرسیدی! بذار فکر کنم... 🤔",
            self.companion_name
        )
    }

    /// Polite message when a search chain found nothing
    pub fn nothing_found_reply(&self) -> String {
        format!(
            "{} جان، چیزی پیدا نکردم! یه جور دیگه بنویس و دوباره امتحان کن 🙏",
            self.companion_name
        )
    }
}
