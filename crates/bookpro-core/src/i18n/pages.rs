//! About and Contact page text.

use super::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    let (pt, en) = match key {
        // --- About ---
        "about.title" => ("Sobre a BookPro Agency", "About BookPro Agency"),
        "about.mission.title" => ("A Nossa Missão", "Our Mission"),
        "about.mission.desc" => (
            "Ajudamos empresas a crescer através de consultoria especializada e estratégias personalizadas.",
            "We help businesses grow through specialized consulting and personalized strategies.",
        ),
        "about.team.title" => ("A Nossa Equipa", "Our Team"),
        "about.team.desc" => (
            "Profissionais experientes com mais de 10 anos de experiência em consultoria empresarial.",
            "Experienced professionals with over 10 years of experience in business consulting.",
        ),
        "about.values.title" => ("Os Nossos Valores", "Our Values"),
        "about.values.desc" => (
            "Comprometemo-nos com a excelência, inovação e o sucesso dos nossos clientes.",
            "We are committed to excellence, innovation and the success of our clients.",
        ),

        // --- Contact ---
        "contact.title" => ("Entre em Contacto", "Get in Touch"),
        "contact.subtitle" => (
            "Estamos aqui para o ajudar. Entre em contacto connosco!",
            "We are here to help. Get in touch with us!",
        ),
        "contact.form.name" => ("Nome", "Name"),
        "contact.form.email" => ("Email", "Email"),
        "contact.form.subject" => ("Assunto", "Subject"),
        "contact.form.message" => ("Mensagem", "Message"),
        "contact.form.send" => ("Enviar Mensagem", "Send Message"),
        "contact.info.title" => ("Informações de Contacto", "Contact Information"),
        "contact.info.address" => ("Morada", "Address"),
        "contact.info.phone" => ("Telefone", "Phone"),
        "contact.info.email" => ("Email", "Email"),
        "contact.info.hours" => ("Horário de Funcionamento", "Business Hours"),
        "contact.info.hours.weekdays" => (
            "Segunda a Sexta: 9:00 - 18:00",
            "Monday to Friday: 9:00 AM - 6:00 PM",
        ),
        "contact.info.hours.weekend" => ("Fim de semana: Fechado", "Weekend: Closed"),

        _ => return None,
    };
    Some(locale.pick(pt, en))
}
