//! About page copy, one target per language.

use super::rule;
use crate::file::search_replace::FileTarget;

pub(super) fn targets() -> Vec<FileTarget> {
    vec![
        FileTarget::new(
            "en/about.html",
            vec![
                rule(
                    "            <h2>What we don't do</h2>",
                    "            <h2>What we build</h2>",
                    "en:about:heading",
                ),
                rule(
                    "            <p>We are not a software agency, development studio, or consultancy. We don't build custom solutions or offer technical services. We build focused applications and release them as products.</p>",
                    "            <p>We build small, focused applications with clear boundaries—tools that help people learn, work, and make decisions with AI in a practical way. We ship products, iterate, and keep the scope tight.</p>",
                    "en:about:section",
                ),
                rule(
                    "            <p>We focus on one project at a time. We don't take client work or build on commission. This allows us to make decisions based on what makes sense, not what sells.</p>",
                    "            <p>We focus on one project at a time. We build our own products rather than taking on client work. This allows us to make decisions based on what makes sense, not what sells.</p>",
                    "en:about:how-we-build",
                ),
                rule(
                    "            <p>We use AI where it provides clear, understandable value. We avoid it where it adds complexity, removes agency, or replaces genuine understanding with approximation.</p>",
                    "            <p>We use AI where it provides clear, understandable value—and keep the experience understandable, calm, and under the user's control.</p>",
                    "en:about:ai-paragraph",
                ),
                rule(
                    "            <p>Our applications are products with clear boundaries. We charge for them transparently when appropriate. We don't rely on advertising or user data as a business model.</p>",
                    "            <p>Our applications are products with clear boundaries. We charge for them transparently when appropriate. Our business model is product-first, with no dependence on advertising or user-data brokerage.</p>",
                    "en:about:business-model",
                ),
            ],
        ),
        FileTarget::new(
            "de/about.html",
            vec![
                rule(
                    "            <h2>Was wir nicht tun</h2>",
                    "            <h2>Was wir bauen</h2>",
                    "de:about:heading",
                ),
                rule(
                    "            <p>Wir sind keine Softwareagentur, kein Entwicklungsstudio und keine Beratung. Wir entwickeln keine maßgeschneiderten Lösungen und bieten keine technischen Dienstleistungen an. Wir entwickeln fokussierte Anwendungen und veröffentlichen sie als Produkte.</p>",
                    "            <p>Wir bauen kleine, fokussierte Anwendungen mit klaren Grenzen – Werkzeuge, die Menschen dabei helfen, KI im Alltag sinnvoll zu nutzen. Wir veröffentlichen Produkte, verbessern sie iterativ und halten den Umfang bewusst schlank.</p>",
                    "de:about:section",
                ),
                rule(
                    "            <p>Wir konzentrieren uns auf jeweils ein Projekt. Wir nehmen keine Kundenaufträge an und entwickeln nicht auf Auftrag. Das erlaubt uns, Entscheidungen danach zu treffen, was sinnvoll ist – nicht danach, was sich verkauft.</p>",
                    "            <p>Wir konzentrieren uns auf jeweils ein Projekt. Wir entwickeln eigene Produkte statt Kundenaufträge anzunehmen. Das erlaubt uns, Entscheidungen danach zu treffen, was sinnvoll ist – nicht danach, was sich verkauft.</p>",
                    "de:about:how-we-build",
                ),
                rule(
                    "            <p>Wir setzen KI dort ein, wo sie klaren, verständlichen Nutzen bringt. Wir vermeiden sie dort, wo sie Komplexität schafft, Handlungsfähigkeit nimmt oder echtes Verstehen durch Annäherung ersetzt.</p>",
                    "            <p>Wir setzen KI dort ein, wo sie klaren, verständlichen Nutzen bringt – und gestalten Anwendungen so, dass sie verständlich bleiben, ruhig wirken und die Kontrolle beim Nutzer lassen.</p>",
                    "de:about:ai-paragraph",
                ),
                rule(
                    "            <p>Unsere Anwendungen sind Produkte mit klaren Grenzen. Wir verlangen transparent Geld dafür, wenn es angemessen ist. Wir stützen uns nicht auf Werbung oder Nutzerdaten als Geschäftsmodell.</p>",
                    "            <p>Unsere Anwendungen sind Produkte mit klaren Grenzen. Wir verlangen transparent Geld dafür, wenn es angemessen ist. Unser Modell ist produktorientiert – ohne Abhängigkeit von Werbung oder dem Handel mit Nutzerdaten.</p>",
                    "de:about:business-model",
                ),
            ],
        ),
        FileTarget::new(
            "fr/about.html",
            vec![
                rule(
                    "            <h2>Ce que nous ne faisons pas</h2>",
                    "            <h2>Ce que nous construisons</h2>",
                    "fr:about:heading",
                ),
                rule(
                    "            <p>Nous ne sommes pas une agence logicielle, un studio de développement ou un cabinet de conseil. Nous ne construisons pas de solutions personnalisées et n'offrons pas de services techniques. Nous créons des applications ciblées et les publions en tant que produits.</p>",
                    "            <p>Nous construisons de petites applications ciblées, avec des limites claires — des outils qui aident à apprendre, travailler et décider avec l'IA de manière pragmatique. Nous publions des produits, les améliorons itérativement et gardons un périmètre volontairement restreint.</p>",
                    "fr:about:section",
                ),
                rule(
                    "            <p>Nous nous concentrons sur un projet à la fois. Nous ne prenons pas de travaux clients ni ne construisons sur commande. Cela nous permet de prendre des décisions basées sur ce qui a du sens, pas sur ce qui se vend.</p>",
                    "            <p>Nous nous concentrons sur un projet à la fois. Nous construisons nos propres produits plutôt que de prendre des travaux clients. Cela nous permet de prendre des décisions basées sur ce qui a du sens, pas sur ce qui se vend.</p>",
                    "fr:about:how-we-build",
                ),
                rule(
                    "            <p>Nous utilisons l'IA là où elle apporte une valeur claire et compréhensible. Nous l'évitons là où elle ajoute de la complexité, retire l'autonomie ou remplace une véritable compréhension par une approximation.</p>",
                    "            <p>Nous utilisons l'IA là où elle apporte une valeur claire et compréhensible — tout en gardant l'expérience compréhensible, calme et sous le contrôle de l'utilisateur.</p>",
                    "fr:about:ai-paragraph",
                ),
                rule(
                    "            <p>Nos applications sont des produits avec des limites claires. Nous les facturons de manière transparente lorsque cela est approprié. Nous ne nous appuyons pas sur la publicité ou les données utilisateur comme modèle commercial.</p>",
                    "            <p>Nos applications sont des produits avec des limites claires. Nous les facturons de manière transparente lorsque cela est approprié. Notre modèle est orienté produit, sans dépendance à la publicité ni à la monétisation des données utilisateur.</p>",
                    "fr:about:business-model",
                ),
            ],
        ),
        FileTarget::new(
            "es/about.html",
            vec![
                rule(
                    "            <h2>Lo que no hacemos</h2>",
                    "            <h2>Lo que construimos</h2>",
                    "es:about:heading",
                ),
                rule(
                    "            <p>No somos una agencia de software, estudio de desarrollo o consultoría. No construimos soluciones personalizadas ni ofrecemos servicios técnicos. Construimos aplicaciones enfocadas y las lanzamos como productos.</p>",
                    "            <p>Construimos aplicaciones pequeñas y enfocadas, con límites claros: herramientas que ayudan a aprender, trabajar y tomar decisiones con IA de forma práctica. Lanzamos productos, iteramos y mantenemos el alcance deliberadamente ajustado.</p>",
                    "es:about:section",
                ),
                rule(
                    "            <p>Nos enfocamos en un proyecto a la vez. No aceptamos trabajos de clientes ni construimos por encargo. Esto nos permite tomar decisiones basadas en lo que tiene sentido, no en lo que se vende.</p>",
                    "            <p>Nos enfocamos en un proyecto a la vez. Construimos nuestros propios productos en lugar de aceptar trabajos de clientes. Esto nos permite tomar decisiones basadas en lo que tiene sentido, no en lo que se vende.</p>",
                    "es:about:how-we-build",
                ),
                rule(
                    "            <p>Usamos IA donde aporta valor claro y comprensible. La evitamos donde agrega complejidad, quita autonomía o reemplaza la comprensión genuina con aproximación.</p>",
                    "            <p>Usamos IA donde aporta valor claro y comprensible, manteniendo la experiencia entendible, tranquila y bajo control del usuario.</p>",
                    "es:about:ai-paragraph",
                ),
                rule(
                    "            <p>Nuestras aplicaciones son productos con límites claros. Cobramos por ellas de manera transparente cuando es apropiado. No dependemos de publicidad o datos de usuario como modelo de negocio.</p>",
                    "            <p>Nuestras aplicaciones son productos con límites claros. Cobramos por ellas de manera transparente cuando es apropiado. Nuestro modelo es orientado a producto, sin depender de publicidad ni de la monetización de datos de usuario.</p>",
                    "es:about:business-model",
                ),
            ],
        ),
        FileTarget::new(
            "it/about.html",
            vec![
                rule(
                    "            <h2>Cosa non facciamo</h2>",
                    "            <h2>Cosa costruiamo</h2>",
                    "it:about:heading",
                ),
                rule(
                    "            <p>Non siamo un'agenzia software, uno studio di sviluppo o una consulenza. Non costruiamo soluzioni personalizzate né offriamo servizi tecnici. Costruiamo applicazioni mirate e le rilasciamo come prodotti.</p>",
                    "            <p>Costruiamo piccole applicazioni mirate, con confini chiari: strumenti che aiutano a imparare, lavorare e prendere decisioni con l'IA in modo pratico. Rilasciamo prodotti, iteriamo e manteniamo lo scopo volutamente ristretto.</p>",
                    "it:about:section",
                ),
                rule(
                    "            <p>Ci concentriamo su un progetto alla volta. Non accettiamo lavori su commissione né costruiamo su ordinazione. Questo ci consente di prendere decisioni basate su ciò che ha senso, non su ciò che vende.</p>",
                    "            <p>Ci concentriamo su un progetto alla volta. Costruiamo i nostri prodotti invece di accettare lavori su commissione. Questo ci consente di prendere decisioni basate su ciò che ha senso, non su ciò che vende.</p>",
                    "it:about:how-we-build",
                ),
                rule(
                    "            <p>Usiamo l'IA dove apporta valore chiaro e comprensibile. La evitiamo dove aggiunge complessità, toglie autonomia o sostituisce una vera comprensione con un'approssimazione.</p>",
                    "            <p>Usiamo l'IA dove apporta valore chiaro e comprensibile, mantenendo l'esperienza comprensibile, calma e sotto il controllo dell'utente.</p>",
                    "it:about:ai-paragraph",
                ),
                rule(
                    "            <p>Le nostre applicazioni sono prodotti con confini chiari. Le facciamo pagare in modo trasparente quando appropriato. Non ci affidiamo a pubblicità o dati utente come modello di business.</p>",
                    "            <p>Le nostre applicazioni sono prodotti con confini chiari. Le facciamo pagare in modo trasparente quando appropriato. Il nostro modello è orientato al prodotto, senza dipendere da pubblicità o dalla monetizzazione dei dati utente.</p>",
                    "it:about:business-model",
                ),
            ],
        ),
        FileTarget::new(
            "nl/about.html",
            vec![
                rule(
                    "            <h2>Wat we niet doen</h2>",
                    "            <h2>Wat we bouwen</h2>",
                    "nl:about:heading",
                ),
                rule(
                    "            <p>We zijn geen softwarebureau, ontwikkelstudio of adviesbureau. We bouwen geen maatwerk oplossingen en bieden geen technische diensten aan. We bouwen gerichte applicaties en brengen ze uit als producten.</p>",
                    "            <p>We bouwen kleine, gerichte applicaties met duidelijke grenzen—hulpmiddelen die mensen praktisch helpen leren, werken en beslissen met AI. We brengen producten uit, verbeteren ze iteratief en houden de scope bewust strak.</p>",
                    "nl:about:section",
                ),
                rule(
                    "            <p>We focussen op één project tegelijk. We accepteren geen klantwerk en bouwen niet op bestelling. Dit stelt ons in staat beslissingen te nemen op basis van wat zinvol is, niet wat verkoopt.</p>",
                    "            <p>We focussen op één project tegelijk. We bouwen onze eigen producten in plaats van klantwerk aan te nemen. Dit stelt ons in staat beslissingen te nemen op basis van wat zinvol is, niet wat verkoopt.</p>",
                    "nl:about:how-we-build",
                ),
                rule(
                    "            <p>We gebruiken AI waar het duidelijke, begrijpelijke waarde biedt. We vermijden het waar het complexiteit toevoegt, autonomie wegneemt of echt begrip vervangt door benadering.</p>",
                    "            <p>We gebruiken AI waar het duidelijke, begrijpelijke waarde biedt, terwijl we de ervaring begrijpelijk, kalm en onder controle van de gebruiker houden.</p>",
                    "nl:about:ai-paragraph",
                ),
                rule(
                    "            <p>Onze applicaties zijn producten met duidelijke grenzen. We rekenen er transparant voor wanneer dat gepast is. We vertrouwen niet op advertenties of gebruikersgegevens als bedrijfsmodel.</p>",
                    "            <p>Onze applicaties zijn producten met duidelijke grenzen. We rekenen er transparant voor wanneer dat gepast is. Ons model is productgericht, zonder afhankelijk te zijn van advertenties of het vermarkten van gebruikersgegevens.</p>",
                    "nl:about:business-model",
                ),
            ],
        ),
    ]
}
