//! Landing page copy.

use super::rule;
use crate::file::search_replace::FileTarget;

pub(super) fn targets() -> Vec<FileTarget> {
    vec![
        FileTarget::new(
            "en/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">We build focused, practical software that uses artificial intelligence where it provides clear value. No hype. No subscriptions. No data harvesting.</p>",
                    "            <p class=\"lead\">Some say AI will save us. Others say doomsday is near. We see a helpful tool—when used with care. We build focused applications that help people use AI to their advantage.</p>",
                    "en:index:lead",
                ),
                rule(
                    "            <p>We build applications as products, not services. We don't offer custom development or consulting. Each application we create reflects our approach to thoughtful, restrained technology.</p>",
                    "            <p>We build applications as products, not services. We focus on shipping and improving our own tools—each one reflects our approach to thoughtful, restrained technology.</p>",
                    "en:index:how-we-work",
                ),
                rule(
                    "            <p>We focus on problems where AI genuinely helps, not where it creates complexity or removes agency.</p>",
                    "            <p>We focus on problems where AI genuinely helps, and we keep the result simple, understandable, and user-controlled.</p>",
                    "en:index:good-ai-detail",
                ),
                rule(
                    "                <p>A learning application built around the idea that you bring the content, we provide the methods. AI assists where it adds clarity, not where it replaces understanding.</p>",
                    "                <p>A learning application built around the idea that you bring the content, we provide the methods. AI assists with structure and clarity—while understanding stays with the learner.</p>",
                    "en:index:project-ai-line",
                ),
            ],
        ),
        FileTarget::new(
            "de/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">Wir entwickeln fokussierte, praktische Software, die künstliche Intelligenz dort einsetzt, wo sie klaren Nutzen bringt. Kein Hype. Keine Abos. Kein Datensammeln.</p>",
                    "            <p class=\"lead\">Manche sagen, KI sei unser Retter. Andere sagen, der Untergang sei nah. Wir sehen ein hilfreiches Werkzeug – wenn es richtig eingesetzt wird. Wir bauen fokussierte Anwendungen, die Menschen helfen, KI zu ihrem Vorteil zu nutzen.</p>",
                    "de:index:lead",
                ),
                rule(
                    "            <p>Wir entwickeln Anwendungen als Produkte, nicht als Dienstleistungen. Wir bieten keine individuelle Entwicklung oder Beratung an. Jede Anwendung, die wir erstellen, spiegelt unseren Ansatz zu durchdachter, zurückhaltender Technologie wider.</p>",
                    "            <p>Wir entwickeln Anwendungen als Produkte, nicht als Dienstleistungen. Wir konzentrieren uns darauf, eigene Werkzeuge zu entwickeln, zu veröffentlichen und zu verbessern – jede Anwendung spiegelt unseren Ansatz zu durchdachter, zurückhaltender Technologie wider.</p>",
                    "de:index:how-we-work",
                ),
                rule(
                    "            <p>Wir konzentrieren uns auf Probleme, bei denen KI tatsächlich hilft – nicht dort, wo sie Komplexität schafft oder Handlungsfähigkeit nimmt.</p>",
                    "            <p>Wir konzentrieren uns auf Probleme, bei denen KI tatsächlich hilft – und halten das Ergebnis bewusst einfach, verständlich und nutzerkontrolliert.</p>",
                    "de:index:good-ai-detail",
                ),
                rule(
                    "                <p>Eine Lernanwendung, die auf der Idee basiert, dass du die Inhalte mitbringst und wir die Methoden bereitstellen. KI unterstützt dort, wo sie Klarheit schafft – nicht dort, wo sie Verstehen ersetzt.</p>",
                    "                <p>Eine Lernanwendung, die auf der Idee basiert, dass du die Inhalte mitbringst und wir die Methoden bereitstellen. KI unterstützt mit Struktur und Klarheit – während das Verstehen bei dir bleibt.</p>",
                    "de:index:project-ai-line",
                ),
            ],
        ),
        FileTarget::new(
            "fr/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">Nous créons des logiciels ciblés et pratiques qui utilisent l'intelligence artificielle là où elle apporte une valeur claire. Pas de battage médiatique. Pas d'abonnements. Pas de collecte de données.</p>",
                    "            <p class=\"lead\">Certains disent que l'IA nous sauvera, d'autres que la fin est proche. Nous y voyons surtout un outil utile — lorsqu'il est bien utilisé. Nous construisons des applications ciblées qui aident les gens à tirer parti de l'IA.</p>",
                    "fr:index:lead",
                ),
                rule(
                    "            <p>Nous créons des applications en tant que produits, pas en tant que services. Nous ne proposons pas de développement personnalisé ni de conseil. Chaque application que nous créons reflète notre approche d'une technologie réfléchie et mesurée.</p>",
                    "            <p>Nous créons des applications en tant que produits, pas en tant que services. Nous nous concentrons sur la création, la publication et l'amélioration de nos propres outils — chaque application reflète notre approche d'une technologie réfléchie et mesurée.</p>",
                    "fr:index:how-we-work",
                ),
                rule(
                    "            <p>Nous nous concentrons sur les problèmes où l'IA aide réellement, et non là où elle crée de la complexité ou retire l'autonomie.</p>",
                    "            <p>Nous nous concentrons sur les problèmes où l'IA aide réellement, tout en gardant le résultat simple, compréhensible et sous le contrôle de l'utilisateur.</p>",
                    "fr:index:good-ai-detail",
                ),
                rule(
                    "                <p>Une application d'apprentissage basée sur l'idée que vous apportez le contenu et nous fournissons les méthodes. L'IA assiste là où elle apporte de la clarté, pas là où elle remplace la compréhension.</p>",
                    "                <p>Une application d'apprentissage basée sur l'idée que vous apportez le contenu et nous fournissons les méthodes. L'IA assiste avec structure et clarté — tout en laissant la compréhension à l'apprenant.</p>",
                    "fr:index:project-ai-line",
                ),
            ],
        ),
        FileTarget::new(
            "es/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">Construimos software enfocado y práctico que usa inteligencia artificial donde aporta valor claro. Sin exageraciones. Sin suscripciones. Sin recopilación de datos.</p>",
                    "            <p class=\"lead\">Algunos dicen que la IA será nuestro salvador; otros, que el fin está cerca. Nosotros la vemos como una herramienta útil, si se usa bien. Construimos aplicaciones enfocadas que ayudan a las personas a aprovechar la IA a su favor.</p>",
                    "es:index:lead",
                ),
                rule(
                    "            <p>Construimos aplicaciones como productos, no como servicios. No ofrecemos desarrollo personalizado ni consultoría. Cada aplicación que creamos refleja nuestro enfoque hacia la tecnología reflexiva y moderada.</p>",
                    "            <p>Construimos aplicaciones como productos, no como servicios. Nos enfocamos en crear, lanzar y mejorar nuestras propias herramientas; cada aplicación refleja nuestro enfoque hacia la tecnología reflexiva y moderada.</p>",
                    "es:index:how-we-work",
                ),
                rule(
                    "            <p>Nos enfocamos en problemas donde la IA realmente ayuda, no donde crea complejidad o quita autonomía.</p>",
                    "            <p>Nos enfocamos en problemas donde la IA realmente ayuda, manteniendo el resultado simple, comprensible y bajo control del usuario.</p>",
                    "es:index:good-ai-detail",
                ),
                rule(
                    "                <p>Una aplicación de aprendizaje basada en la idea de que tú aportas el contenido y nosotros proporcionamos los métodos. La IA asiste donde aporta claridad, no donde reemplaza la comprensión.</p>",
                    "                <p>Una aplicación de aprendizaje basada en la idea de que tú aportas el contenido y nosotros proporcionamos los métodos. La IA asiste con estructura y claridad, mientras el entendimiento sigue siendo tuyo.</p>",
                    "es:index:project-ai-line",
                ),
            ],
        ),
        FileTarget::new(
            "it/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">Costruiamo software mirato e pratico che utilizza l'intelligenza artificiale dove apporta valore chiaro. Niente hype. Niente abbonamenti. Niente raccolta dati.</p>",
                    "            <p class=\"lead\">C'è chi dice che l'IA ci salverà e chi parla di fine imminente. Noi la vediamo come uno strumento utile, se usato bene. Costruiamo applicazioni mirate che aiutano le persone a usare l'IA a proprio vantaggio.</p>",
                    "it:index:lead",
                ),
                rule(
                    "            <p>Costruiamo applicazioni come prodotti, non come servizi. Non offriamo sviluppo personalizzato o consulenza. Ogni applicazione che creiamo riflette il nostro approccio a una tecnologia ponderata e moderata.</p>",
                    "            <p>Costruiamo applicazioni come prodotti, non come servizi. Ci concentriamo sul creare, rilasciare e migliorare i nostri strumenti; ogni applicazione riflette il nostro approccio a una tecnologia ponderata e moderata.</p>",
                    "it:index:how-we-work",
                ),
                rule(
                    "            <p>Ci concentriamo sui problemi dove l'IA aiuta davvero, non dove crea complessità o toglie autonomia.</p>",
                    "            <p>Ci concentriamo sui problemi dove l'IA aiuta davvero, mantenendo il risultato semplice, comprensibile e sotto il controllo dell'utente.</p>",
                    "it:index:good-ai-detail",
                ),
                rule(
                    "                <p>Un'applicazione di apprendimento basata sull'idea che tu porti i contenuti e noi forniamo i metodi. L'IA assiste dove apporta chiarezza, non dove sostituisce la comprensione.</p>",
                    "                <p>Un'applicazione di apprendimento basata sull'idea che tu porti i contenuti e noi forniamo i metodi. L'IA assiste con struttura e chiarezza — mentre la comprensione resta a te.</p>",
                    "it:index:project-ai-line",
                ),
            ],
        ),
        FileTarget::new(
            "nl/index.html",
            vec![
                rule(
                    "            <p class=\"lead\">We bouwen gerichte, praktische software die kunstmatige intelligentie gebruikt waar het duidelijke waarde biedt. Geen hype. Geen abonnementen. Geen dataverzameling.</p>",
                    "            <p class=\"lead\">Sommigen zeggen dat AI onze redder is, anderen dat het einde nabij is. Wij zien vooral een handig hulpmiddel—als je het goed inzet. We bouwen gerichte applicaties die mensen helpen AI in hun voordeel te gebruiken.</p>",
                    "nl:index:lead",
                ),
                rule(
                    "            <p>We bouwen applicaties als producten, niet als diensten. We bieden geen maatwerkontwikkeling of advies aan. Elke applicatie die we creëren weerspiegelt onze benadering van doordachte, terughoudende technologie.</p>",
                    "            <p>We bouwen applicaties als producten, niet als diensten. We focussen op het bouwen, uitbrengen en verbeteren van onze eigen hulpmiddelen; elke applicatie weerspiegelt onze benadering van doordachte, terughoudende technologie.</p>",
                    "nl:index:how-we-work",
                ),
                rule(
                    "            <p>We focussen op problemen waar AI echt helpt, niet waar het complexiteit creëert of autonomie wegneemt.</p>",
                    "            <p>We focussen op problemen waar AI echt helpt, en we houden het resultaat simpel, begrijpelijk en onder controle van de gebruiker.</p>",
                    "nl:index:good-ai-detail",
                ),
                rule(
                    "                <p>Een leerapplicatie gebaseerd op het idee dat jij de inhoud meebrengt en wij de methoden bieden. AI assisteert waar het duidelijkheid biedt, niet waar het begrip vervangt.</p>",
                    "                <p>Een leerapplicatie gebaseerd op het idee dat jij de inhoud meebrengt en wij de methoden bieden. AI helpt met structuur en duidelijkheid—terwijl begrip bij de leerling blijft.</p>",
                    "nl:index:project-ai-line",
                ),
            ],
        ),
    ]
}
