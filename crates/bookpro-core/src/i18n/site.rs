//! Page chrome: navigation, hero, feature highlights, footer, and general labels.

use super::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    let (pt, en) = match key {
        // --- Navigation ---
        "nav.services" => ("Serviços", "Services"),
        "nav.about" => ("Sobre", "About"),
        "nav.contact" => ("Contacto", "Contact"),

        // --- Hero ---
        "hero.title.book" => ("Reserve o Seu", "Book Your"),
        "hero.title.success" => ("Sucesso", "Success"),
        "hero.subtitle" => (
            "Marque facilmente os seus serviços de consultoria com a nossa plataforma de reservas online. Processo simples, confirmação instantânea.",
            "Easily schedule your consulting services with our online booking platform. Simple process, instant confirmation.",
        ),
        "hero.cta" => ("Reservar Agora", "Book Now"),
        "hero.cancellation" => (
            "Cancelamento gratuito até 24h antes",
            "Free cancellation up to 24h before",
        ),

        // --- Features ---
        "features.scheduling.title" => ("Agendamento Fácil", "Easy Scheduling"),
        "features.scheduling.desc" => (
            "Marque o seu horário em poucos cliques com o nosso calendário intuitivo.",
            "Book your appointment in just a few clicks with our intuitive calendar.",
        ),
        "features.hours.title" => ("Horário Flexível", "Flexible Hours"),
        "features.hours.desc" => (
            "Disponível de segunda a sexta, das 9h às 18h para a sua conveniência.",
            "Available Monday to Friday, 9 AM to 6 PM for your convenience.",
        ),
        "features.team.title" => ("Equipa Especializada", "Expert Team"),
        "features.team.desc" => (
            "Profissionais experientes prontos para o ajudar a atingir os seus objetivos.",
            "Experienced professionals ready to help you achieve your goals.",
        ),

        // --- Footer ---
        "footer.tagline" => (
            "O seu parceiro de confiança para o crescimento empresarial",
            "Your trusted partner for business growth",
        ),
        "footer.privacy" => ("Privacidade", "Privacy"),
        "footer.terms" => ("Termos", "Terms"),
        "footer.support" => ("Suporte", "Support"),

        // --- Language switcher ---
        "lang.pt" => ("Português", "Portuguese"),
        "lang.en" => ("Inglês", "English"),
        "lang.switch" => ("Mudar idioma", "Switch language"),

        // --- General ---
        "back" => ("Voltar", "Back"),
        "quit" => ("Sair", "Quit"),

        _ => return None,
    };
    Some(locale.pick(pt, en))
}
