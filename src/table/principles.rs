use super::rule;
use crate::file::search_replace::FileTarget;

pub(super) fn targets() -> Vec<FileTarget> {
    vec![
        FileTarget::new(
            "en/principles.html",
            vec![
                rule(
                    "                <h3>No subscriptions</h3>\n                <p>We charge for applications when appropriate, but we don't lock features behind recurring payments. If you buy something, you own it.</p>",
                    "                <h3>Ownership-first pricing</h3>\n                <p>When an application costs money, we price it in a way that feels like buying a product. If you buy something, you own it.</p>",
                    "en:principles:pricing",
                ),
                rule(
                    "                <h3>No dark patterns</h3>\n                <p>Every interaction is designed to be clear and honest. We don't manipulate users into decisions they don't want to make.</p>",
                    "                <h3>Honest interfaces</h3>\n                <p>Every interaction is designed to be clear and honest. People should understand what's happening and why.</p>",
                    "en:principles:ux",
                ),
                rule(
                    "                <h3>No data harvesting</h3>\n                <p>We don't collect user data for profiling or resale. If data needs to be stored, we're explicit about what, why, and for how long.</p>",
                    "                <h3>Data minimization</h3>\n                <p>We minimize data collection and keep it purpose-driven. If data needs to be stored, we're explicit about what, why, and for how long.</p>",
                    "en:principles:data",
                ),
                rule(
                    "                <h3>Transparent monetization</h3>\n                <p>If an application costs money, we're direct about it. No hidden fees, no surprise charges, no ad-based business models.</p>",
                    "                <h3>Transparent monetization</h3>\n                <p>If an application costs money, we're direct about it: clear pricing, predictable costs, and a product-first model.</p>",
                    "en:principles:monetization",
                ),
                rule(
                    "                <h3>AI only where useful</h3>\n                <p>We use AI where it provides clear, understandable value. We don't use it to obscure functionality or replace genuine understanding with approximation.</p>",
                    "                <h3>AI only where useful</h3>\n                <p>We use AI to add clear, understandable value. Functionality stays transparent, and the user stays in control.</p>",
                    "en:principles:ai",
                ),
                rule(
                    "                <h3>Restrained by default</h3>\n                <p>Applications should be calm and focused. No unnecessary notifications, no gamification for engagement, no features designed to create dependency.</p>",
                    "                <h3>Restrained by default</h3>\n                <p>Applications should be calm and focused. Notifications are used sparingly, and features are designed to support goals rather than create dependency.</p>",
                    "en:principles:restrained",
                ),
                rule(
                    "                <h3>Clear boundaries</h3>\n                <p>Each application has a specific purpose. We don't build platforms that expand endlessly. We build tools that do one thing well.</p>",
                    "                <h3>Clear boundaries</h3>\n                <p>Each application has a specific purpose. We build tools with a tight scope that do one thing well.</p>",
                    "en:principles:boundaries",
                ),
            ],
        ),
        FileTarget::new(
            "de/principles.html",
            vec![
                rule(
                    "                <h3>Keine Abos</h3>\n                <p>Wir verlangen Geld für Anwendungen, wenn es angemessen ist, aber wir sperren keine Funktionen hinter wiederkehrenden Zahlungen. Wenn du etwas kaufst, gehört es dir.</p>",
                    "                <h3>Einmal kaufen, besitzen</h3>\n                <p>Wenn eine Anwendung Geld kostet, bepreisen wir sie wie ein Produkt. Wenn du etwas kaufst, gehört es dir.</p>",
                    "de:principles:pricing",
                ),
                rule(
                    "                <h3>Keine Dark Patterns</h3>\n                <p>Jede Interaktion ist so gestaltet, dass sie klar und ehrlich ist. Wir manipulieren Nutzer nicht zu Entscheidungen, die sie nicht treffen wollen.</p>",
                    "                <h3>Ehrliche Interfaces</h3>\n                <p>Jede Interaktion ist so gestaltet, dass sie klar und ehrlich ist. Menschen sollen verstehen, was passiert – und warum.</p>",
                    "de:principles:ux",
                ),
                rule(
                    "                <h3>Kein Datensammeln</h3>\n                <p>Wir sammeln keine Nutzerdaten für Profiling oder Weiterverkauf. Wenn Daten gespeichert werden müssen, sind wir explizit darüber, was, warum und wie lange.</p>",
                    "                <h3>Datenminimierung</h3>\n                <p>Wir minimieren Datenerhebung und halten sie zweckgebunden. Wenn Daten gespeichert werden müssen, sind wir explizit darüber, was, warum und wie lange.</p>",
                    "de:principles:data",
                ),
                rule(
                    "                <h3>Transparente Monetarisierung</h3>\n                <p>Wenn eine Anwendung Geld kostet, sind wir direkt damit. Keine versteckten Gebühren, keine Überraschungskosten, keine werbebasierten Geschäftsmodelle.</p>",
                    "                <h3>Transparente Monetarisierung</h3>\n                <p>Wenn eine Anwendung Geld kostet, sind wir direkt damit: klare Preise, planbare Kosten und ein produktorientiertes Modell.</p>",
                    "de:principles:monetization",
                ),
                rule(
                    "                <h3>KI nur wo nützlich</h3>\n                <p>Wir setzen KI dort ein, wo sie klaren, verständlichen Nutzen bringt. Wir nutzen sie nicht, um Funktionalität zu verschleiern oder echtes Verstehen durch Annäherung zu ersetzen.</p>",
                    "                <h3>KI nur wo nützlich</h3>\n                <p>Wir setzen KI ein, um klaren, verständlichen Nutzen zu schaffen. Funktionen bleiben transparent, und die Kontrolle bleibt beim Nutzer.</p>",
                    "de:principles:ai",
                ),
                rule(
                    "                <h3>Standardmäßig zurückhaltend</h3>\n                <p>Anwendungen sollten ruhig und fokussiert sein. Keine unnötigen Benachrichtigungen, keine Gamification für Engagement, keine Features, die Abhängigkeit schaffen sollen.</p>",
                    "                <h3>Standardmäßig zurückhaltend</h3>\n                <p>Anwendungen sollten ruhig und fokussiert sein. Benachrichtigungen werden sparsam eingesetzt, und Features unterstützen Ziele statt Abhängigkeit zu erzeugen.</p>",
                    "de:principles:restrained",
                ),
                rule(
                    "                <h3>Klare Grenzen</h3>\n                <p>Jede Anwendung hat einen spezifischen Zweck. Wir bauen keine Plattformen, die sich endlos erweitern. Wir bauen Werkzeuge, die eine Sache gut machen.</p>",
                    "                <h3>Klare Grenzen</h3>\n                <p>Jede Anwendung hat einen spezifischen Zweck. Wir bauen Werkzeuge mit bewusst engem Umfang, die eine Sache gut machen.</p>",
                    "de:principles:boundaries",
                ),
            ],
        ),
        FileTarget::new(
            "fr/principles.html",
            vec![
                rule(
                    "                <h3>Pas d'abonnements</h3>\n                <p>Nous facturons les applications lorsque cela est approprié, mais nous ne verrouillons pas les fonctionnalités derrière des paiements récurrents. Si vous achetez quelque chose, vous le possédez.</p>",
                    "                <h3>Prix clair, esprit produit</h3>\n                <p>Quand une application coûte de l'argent, nous la tarifons comme un produit. Si vous achetez quelque chose, vous le possédez.</p>",
                    "fr:principles:pricing",
                ),
                rule(
                    "                <h3>Pas de dark patterns</h3>\n                <p>Chaque interaction est conçue pour être claire et honnête. Nous ne manipulons pas les utilisateurs vers des décisions qu'ils ne veulent pas prendre.</p>",
                    "                <h3>Interfaces honnêtes</h3>\n                <p>Chaque interaction est conçue pour être claire et honnête. Les gens doivent comprendre ce qui se passe — et pourquoi.</p>",
                    "fr:principles:ux",
                ),
                rule(
                    "                <h3>Pas de collecte de données</h3>\n                <p>Nous ne collectons pas de données utilisateur pour le profilage ou la revente. Si des données doivent être stockées, nous sommes explicites sur quoi, pourquoi et pour combien de temps.</p>",
                    "                <h3>Minimisation des données</h3>\n                <p>Nous minimisons la collecte de données et la gardons strictement liée à un objectif. Si des données doivent être stockées, nous sommes explicites sur quoi, pourquoi et pour combien de temps.</p>",
                    "fr:principles:data",
                ),
                rule(
                    "                <h3>Monétisation transparente</h3>\n                <p>Si une application coûte de l'argent, nous sommes directs à ce sujet. Pas de frais cachés, pas de frais surprises, pas de modèles commerciaux basés sur la publicité.</p>",
                    "                <h3>Monétisation transparente</h3>\n                <p>Si une application coûte de l'argent, nous sommes directs : prix clairs, coûts prévisibles et un modèle orienté produit.</p>",
                    "fr:principles:monetization",
                ),
                rule(
                    "                <h3>IA uniquement où utile</h3>\n                <p>Nous utilisons l'IA là où elle apporte une valeur claire et compréhensible. Nous ne l'utilisons pas pour obscurcir la fonctionnalité ou remplacer une véritable compréhension par une approximation.</p>",
                    "                <h3>IA uniquement où utile</h3>\n                <p>Nous utilisons l'IA pour apporter une valeur claire et compréhensible. Les fonctionnalités restent transparentes, et l'utilisateur garde le contrôle.</p>",
                    "fr:principles:ai",
                ),
                rule(
                    "                <h3>Retenue par défaut</h3>\n                <p>Les applications doivent être calmes et ciblées. Pas de notifications inutiles, pas de gamification pour l'engagement, pas de fonctionnalités conçues pour créer une dépendance.</p>",
                    "                <h3>Retenue par défaut</h3>\n                <p>Les applications doivent être calmes et ciblées. Les notifications sont utilisées avec parcimonie, et les fonctionnalités soutiennent des objectifs plutôt que de créer une dépendance.</p>",
                    "fr:principles:restrained",
                ),
                rule(
                    "                <h3>Limites claires</h3>\n                <p>Chaque application a un objectif spécifique. Nous ne construisons pas de plateformes qui s'étendent sans fin. Nous construisons des outils qui font bien une chose.</p>",
                    "                <h3>Limites claires</h3>\n                <p>Chaque application a un objectif spécifique. Nous construisons des outils au périmètre resserré qui font bien une chose.</p>",
                    "fr:principles:boundaries",
                ),
            ],
        ),
        FileTarget::new(
            "es/principles.html",
            vec![
                rule(
                    "                <h3>Sin suscripciones</h3>\n                <p>Cobramos por aplicaciones cuando es apropiado, pero no bloqueamos características detrás de pagos recurrentes. Si compras algo, te pertenece.</p>",
                    "                <h3>Precio claro, como producto</h3>\n                <p>Cuando una aplicación cuesta dinero, la cobramos como un producto. Si compras algo, te pertenece.</p>",
                    "es:principles:pricing",
                ),
                rule(
                    "                <h3>Sin patrones oscuros</h3>\n                <p>Cada interacción está diseñada para ser clara y honesta. No manipulamos a los usuarios hacia decisiones que no quieren tomar.</p>",
                    "                <h3>Interfaces honestas</h3>\n                <p>Cada interacción está diseñada para ser clara y honesta. Las personas deben entender qué pasa y por qué.</p>",
                    "es:principles:ux",
                ),
                rule(
                    "                <h3>Sin recopilación de datos</h3>\n                <p>No recopilamos datos de usuario para perfiles o reventa. Si es necesario almacenar datos, somos explícitos sobre qué, por qué y durante cuánto tiempo.</p>",
                    "                <h3>Minimización de datos</h3>\n                <p>Minimizamos la recopilación de datos y la mantenemos ligada a un propósito. Si es necesario almacenar datos, somos explícitos sobre qué, por qué y durante cuánto tiempo.</p>",
                    "es:principles:data",
                ),
                rule(
                    "                <h3>Monetización transparente</h3>\n                <p>Si una aplicación cuesta dinero, somos directos al respecto. Sin tarifas ocultas, sin cargos sorpresa, sin modelos de negocio basados en publicidad.</p>",
                    "                <h3>Monetización transparente</h3>\n                <p>Si una aplicación cuesta dinero, somos directos: precios claros, costos predecibles y un modelo orientado a producto.</p>",
                    "es:principles:monetization",
                ),
                rule(
                    "                <h3>IA solo donde sea útil</h3>\n                <p>Usamos IA donde aporta valor claro y comprensible. No la usamos para oscurecer funcionalidad o reemplazar comprensión genuina con aproximación.</p>",
                    "                <h3>IA solo donde sea útil</h3>\n                <p>Usamos IA para aportar valor claro y comprensible. La funcionalidad se mantiene transparente y el usuario conserva el control.</p>",
                    "es:principles:ai",
                ),
                rule(
                    "                <h3>Moderado por defecto</h3>\n                <p>Las aplicaciones deben ser tranquilas y enfocadas. Sin notificaciones innecesarias, sin gamificación para el compromiso, sin características diseñadas para crear dependencia.</p>",
                    "                <h3>Moderado por defecto</h3>\n                <p>Las aplicaciones deben ser tranquilas y enfocadas. Las notificaciones se usan con moderación, y las características apoyan objetivos en lugar de crear dependencia.</p>",
                    "es:principles:restrained",
                ),
                rule(
                    "                <h3>Límites claros</h3>\n                <p>Cada aplicación tiene un propósito específico. No construimos plataformas que se expanden sin fin. Construimos herramientas que hacen bien una cosa.</p>",
                    "                <h3>Límites claros</h3>\n                <p>Cada aplicación tiene un propósito específico. Construimos herramientas con un alcance deliberadamente ajustado que hacen bien una cosa.</p>",
                    "es:principles:boundaries",
                ),
            ],
        ),
        FileTarget::new(
            "it/principles.html",
            vec![
                rule(
                    "                <h3>Niente abbonamenti</h3>\n                <p>Facciamo pagare le applicazioni quando appropriato, ma non blocchiamo le funzionalità dietro pagamenti ricorrenti. Se acquisti qualcosa, è tuo.</p>",
                    "                <h3>Prezzo chiaro, spirito prodotto</h3>\n                <p>Quando un'applicazione costa denaro, la prezziamo come un prodotto. Se acquisti qualcosa, è tuo.</p>",
                    "it:principles:pricing",
                ),
                rule(
                    "                <h3>Niente dark pattern</h3>\n                <p>Ogni interazione è progettata per essere chiara e onesta. Non manipoliamo gli utenti verso decisioni che non vogliono prendere.</p>",
                    "                <h3>Interfacce oneste</h3>\n                <p>Ogni interazione è progettata per essere chiara e onesta. Le persone devono capire cosa succede e perché.</p>",
                    "it:principles:ux",
                ),
                rule(
                    "                <h3>Niente raccolta dati</h3>\n                <p>Non raccogliamo dati utente per profilazione o rivendita. Se i dati devono essere archiviati, siamo espliciti su cosa, perché e per quanto tempo.</p>",
                    "                <h3>Minimizzazione dei dati</h3>\n                <p>Minimizziamo la raccolta dati e la manteniamo legata a uno scopo. Se i dati devono essere archiviati, siamo espliciti su cosa, perché e per quanto tempo.</p>",
                    "it:principles:data",
                ),
                rule(
                    "                <h3>Monetizzazione trasparente</h3>\n                <p>Se un'applicazione costa denaro, siamo diretti al riguardo. Niente tariffe nascoste, niente costi sorpresa, niente modelli di business basati su pubblicità.</p>",
                    "                <h3>Monetizzazione trasparente</h3>\n                <p>Se un'applicazione costa denaro, siamo diretti: prezzi chiari, costi prevedibili e un modello orientato al prodotto.</p>",
                    "it:principles:monetization",
                ),
                rule(
                    "                <h3>IA solo dove utile</h3>\n                <p>Usiamo l'IA dove apporta valore chiaro e comprensibile. Non la usiamo per oscurare la funzionalità o sostituire una vera comprensione con un'approssimazione.</p>",
                    "                <h3>IA solo dove utile</h3>\n                <p>Usiamo l'IA per apportare valore chiaro e comprensibile. Le funzionalità restano trasparenti e l'utente mantiene il controllo.</p>",
                    "it:principles:ai",
                ),
                rule(
                    "                <h3>Moderato per impostazione predefinita</h3>\n                <p>Le applicazioni dovrebbero essere calme e mirate. Niente notifiche inutili, niente gamification per il coinvolgimento, niente funzionalità progettate per creare dipendenza.</p>",
                    "                <h3>Moderato per impostazione predefinita</h3>\n                <p>Le applicazioni dovrebbero essere calme e mirate. Le notifiche sono usate con parsimonia, e le funzionalità supportano obiettivi invece di creare dipendenza.</p>",
                    "it:principles:restrained",
                ),
                rule(
                    "                <h3>Confini chiari</h3>\n                <p>Ogni applicazione ha uno scopo specifico. Non costruiamo piattaforme che si espandono all'infinito. Costruiamo strumenti che fanno bene una cosa.</p>",
                    "                <h3>Confini chiari</h3>\n                <p>Ogni applicazione ha uno scopo specifico. Costruiamo strumenti con uno scopo volutamente ristretto che fanno bene una cosa.</p>",
                    "it:principles:boundaries",
                ),
            ],
        ),
        FileTarget::new(
            "nl/principles.html",
            vec![
                rule(
                    "                <h3>Geen abonnementen</h3>\n                <p>We rekenen voor applicaties wanneer dat gepast is, maar we vergrendelen functies niet achter terugkerende betalingen. Als je iets koopt, bezit je het.</p>",
                    "                <h3>Eerlijk geprijsd als product</h3>\n                <p>Als een applicatie geld kost, prijzen we die als een product. Als je iets koopt, bezit je het.</p>",
                    "nl:principles:pricing",
                ),
                rule(
                    "                <h3>Geen dark patterns</h3>\n                <p>Elke interactie is ontworpen om duidelijk en eerlijk te zijn. We manipuleren gebruikers niet naar beslissingen die ze niet willen nemen.</p>",
                    "                <h3>Eerlijke interfaces</h3>\n                <p>Elke interactie is ontworpen om duidelijk en eerlijk te zijn. Mensen moeten begrijpen wat er gebeurt en waarom.</p>",
                    "nl:principles:ux",
                ),
                rule(
                    "                <h3>Geen dataverzameling</h3>\n                <p>We verzamelen geen gebruikersgegevens voor profilering of doorverkoop. Als gegevens moeten worden opgeslagen, zijn we expliciet over wat, waarom en voor hoe lang.</p>",
                    "                <h3>Dataminimalisatie</h3>\n                <p>We minimaliseren dataverzameling en houden het doelgericht. Als gegevens moeten worden opgeslagen, zijn we expliciet over wat, waarom en voor hoe lang.</p>",
                    "nl:principles:data",
                ),
                rule(
                    "                <h3>Transparante monetisatie</h3>\n                <p>Als een applicatie geld kost, zijn we daar direct over. Geen verborgen kosten, geen verrassingskosten, geen op advertenties gebaseerde bedrijfsmodellen.</p>",
                    "                <h3>Transparante monetisatie</h3>\n                <p>Als een applicatie geld kost, zijn we daar direct over: duidelijke prijzen, voorspelbare kosten en een productgericht model.</p>",
                    "nl:principles:monetization",
                ),
                rule(
                    "                <h3>AI alleen waar nuttig</h3>\n                <p>We gebruiken AI waar het duidelijke, begrijpelijke waarde biedt. We gebruiken het niet om functionaliteit te verdoezelen of echt begrip te vervangen door benadering.</p>",
                    "                <h3>AI alleen waar nuttig</h3>\n                <p>We gebruiken AI om duidelijke, begrijpelijke waarde te leveren. Functionaliteit blijft transparant en de gebruiker houdt de controle.</p>",
                    "nl:principles:ai",
                ),
                rule(
                    "                <h3>Standaard terughoudend</h3>\n                <p>Applicaties moeten kalm en gericht zijn. Geen onnodige meldingen, geen gamificatie voor betrokkenheid, geen functies ontworpen om afhankelijkheid te creëren.</p>",
                    "                <h3>Standaard terughoudend</h3>\n                <p>Applicaties moeten kalm en gericht zijn. Meldingen worden spaarzaam gebruikt, en functies ondersteunen doelen in plaats van afhankelijkheid te creëren.</p>",
                    "nl:principles:restrained",
                ),
                rule(
                    "                <h3>Duidelijke grenzen</h3>\n                <p>Elke applicatie heeft een specifiek doel. We bouwen geen platforms die eindeloos uitbreiden. We bouwen hulpmiddelen die één ding goed doen.</p>",
                    "                <h3>Duidelijke grenzen</h3>\n                <p>Elke applicatie heeft een specifiek doel. We bouwen hulpmiddelen met een bewust strakke scope die één ding goed doen.</p>",
                    "nl:principles:boundaries",
                ),
            ],
        ),
    ]
}
