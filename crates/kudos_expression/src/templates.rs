//! Built-in compliment templates.
//!
//! Placeholders: `{field}` or `{field|fallback}`, see [`crate::template`].
//! Hindi has no celebration or service buckets; the selector falls back to
//! hype and bestFriend there. Only Hindlish carries a lover bucket.

use crate::category::Category;

pub(crate) type Table = &'static [(Category, &'static [&'static str])];

pub(crate) const ENGLISH: Table = &[
    (
        Category::Hype,
        &[
            "🔥 Wow! Your {intent} story is absolutely incredible! I can feel the {emotion} energy radiating from your words. Your {style} style is so engaging - you've got serious talent!",
            "🚀 Outstanding! Your {confidence}/10 confidence level shines through in this {intent} story. The {emotion} tone combined with your {style} approach makes this truly special!",
            "🎉 Bravo! This {intent} tale told in your {style} voice shows tremendous {emotion} spirit. Your {confidence}/10 confidence is inspiring!",
            "🌟 Incredible work! Your {intent} story showcases your {emotion} nature beautifully. With your {style} storytelling and {confidence}/10 confidence, you're destined for greatness!",
            "⚡ Your {style} approach to {intent} is absolutely electrifying! With a {confidence}/10 confidence level and those {emotion} vibes, you're creating something truly special!",
        ],
    ),
    (
        Category::SoftCare,
        &[
            "🤍 Your story touched my heart. It takes courage to share something so personal, and your {style} way of expressing your {intent} journey is truly beautiful. I hope you're feeling proud of yourself.",
            "🤗 Thank you for sharing this vulnerable {intent} moment with us. Your {style} expression of {emotion} feelings shows great strength. You're doing better than you think.",
            "💕 Your gentle {style} storytelling about your {intent} experience resonates deeply. It's okay to feel {emotion}, and I'm here for you.",
            "🌼 Sharing your {intent} story took bravery, and your {style} approach to expressing {emotion} emotions is admirable. Remember, you're stronger than you realize.",
            "💝 Your {style} way of sharing your {emotion} {intent} experience shows such depth of character. Your {trait|thoughtful} nature really shines through.",
        ],
    ),
    (
        Category::BestFriend,
        &[
            "🧸 Hey there! I just read your story about {intent} and I have to say - you're amazing! Your {style} storytelling had me hooked. It's so cool to see how {emotion} you are about this!",
            "😎 Wow, friend! This {intent} story told in your {style} style is awesome. Your {confidence}/10 confidence level is showing! Keep being your awesome self!",
            "💫 Love this {intent} tale of yours! Your {style} way of sharing really captures the {emotion} vibe. You've got this!",
            "🌈 You're such an inspiration! Reading about your {intent} journey in your {style} style made my day. Your {emotion} energy is contagious!",
            "🌟 Your {style} storytelling about {intent} really showcases your {trait|unique} personality. Keep being your wonderful self!",
        ],
    ),
    (
        Category::DeepSoul,
        &[
            "🌙 Your {style} narrative about {intent} speaks volumes. There's something profound in the way you've captured your {emotion} feelings. Your growth is evident, and that authenticity is rare and precious.",
            "✨ The depth in your {style} writing about {intent} is remarkable. Your ability to articulate {emotion} experiences with {confidence}/10 confidence shows real maturity.",
            "🌌 Your reflective {style} approach to this {intent} journey reveals so much insight. The way you've processed these {emotion} emotions is truly wisdom in action.",
            "🌠 Your {style} exploration of {intent} demonstrates profound introspection. The {emotion} undertones in your narrative reveal a depth of character that's truly admirable.",
            "🔮 Your {style} reflection on {intent} reveals such profound insight. Your {trait|introspective} nature combined with {emotion} emotions creates a truly moving narrative.",
        ],
    ),
    (
        Category::Creativity,
        &[
            "🎨 Your {style} approach to {intent} shows incredible creative flair! The way you've woven {emotion} emotions into your narrative demonstrates true artistic talent.",
            "🎭 The creative depth in your {style} storytelling about {intent} is remarkable. Your ability to express {emotion} feelings with {confidence}/10 confidence shows genuine artistic vision.",
            "🖼️ Your {style} exploration of {intent} reveals a creative mind at work. The {emotion} undertones in your narrative combined with your {trait|imaginative} nature make for compelling storytelling.",
        ],
    ),
    (
        Category::Achievement,
        &[
            "🏆 Your {intent} story is a testament to your {confidence}/10 confidence and determination. The {emotion} pride in your words is well deserved!",
            "🎯 Achieving {intent} with such {emotion} enthusiasm shows your {trait|driven} nature. Your {confidence}/10 confidence level is truly inspiring!",
            "🏅 Your journey with {intent} demonstrates the {emotion} satisfaction that comes from hard work. With your {style} storytelling, you're celebrating success in style!",
        ],
    ),
    (
        Category::Celebration,
        &[
            "🎉 What a celebration! Your {intent} story is bursting with {emotion} energy, and your {style} telling lets me feel like I was right there with you.",
            "🥳 This is the kind of moment worth remembering forever! The {emotion} joy in your words and your {trait} spirit make this {intent} story shine.",
            "🎊 Celebrations like this are even better when shared. Thank you for bringing us into your {emotion} moment with such a {style} voice!",
        ],
    ),
    (
        Category::Service,
        &[
            "🤲 The way you showed up for others in this story is truly beautiful. Your {trait} heart makes the world a kinder place.",
            "🌻 Your {style} story about helping others is a reminder of how much one person can change someone's day. That {emotion} warmth you carry is a gift.",
            "💛 Kindness like yours ripples outward. This {intent} story shows a {trait} soul who knows what really matters.",
        ],
    ),
    (
        Category::Male,
        &[
            "🧔 Looking sharp! The confidence in your posture and expression really stands out. You've got that classic charm and determination that's truly admirable.",
            "💪 The strength and determination in your expression is inspiring! You carry yourself with the kind of confidence that draws people in.",
            "😎 That look of focused determination is incredibly attractive. You've got the kind of presence that commands attention in the best way.",
            "🔥 Your {mood|confident} expression and {quality|clear} photo really capture your {trait|charismatic} personality!",
        ],
    ),
    (
        Category::Female,
        &[
            "👸 The grace and elegance in your expression is absolutely captivating. You radiate a kind of beauty that's both strong and gentle.",
            "💃 There's something magical about the way you carry yourself. Your presence is both empowering and enchanting.",
            "🌹 The warmth and kindness in your eyes is truly beautiful. You have a way of making everyone around you feel special.",
            "✨ Your {mood|radiant} expression in this {timeOfDay|beautiful} light truly captures your {trait|elegant} nature!",
        ],
    ),
    (
        Category::Group,
        &[
            "👥 The bond and connection between all of you is palpable! There's something special about the energy you share as a group.",
            "🤝 The camaraderie and friendship among your group is truly heartwarming. You all seem to bring out the best in each other.",
            "🎊 The collective joy and energy in this group shot is infectious! You all seem to have created something wonderful together.",
            "💫 The {mood|joyful} atmosphere and {quality|excellent} photo quality really capture the {trait|wonderful} connection between all of you!",
        ],
    ),
    (
        Category::Nature,
        &[
            "🌿 The serenity and beauty of this natural scene is breathtaking. Nature has a way of putting everything into perspective.",
            "🌄 This landscape captures something timeless and peaceful. Being surrounded by such beauty must be incredibly grounding.",
            "🌺 The natural beauty in this image reminds us of the simple wonders that surround us every day. It's a perfect moment of tranquility.",
            "🌍 This {setting|natural} scene captured during {timeOfDay|the day} perfectly embodies the {emotion|peaceful} mood. Nature's beauty is truly inspiring!",
        ],
    ),
];

pub(crate) const HINDI: Table = &[
    (
        Category::Hype,
        &[
            "🔥 वाह! आपकी {intent} कहानी बेहद शानदार है! मुझे आपके शब्दों से निकलती {emotion} ऊर्जा का एहसास हो रहा है। आपकी {style} शैली इतनी आकर्षक है - आपमें खास माया है!",
            "🚀 अद्भुत! आपका {confidence}/10 आत्मविश्वास स्तर इस {intent} कहानी में चमक रहा है। {emotion} टोन और आपकी {style} पहुंच का संयोजन इसे विशेष बनाता है!",
            "🎉 बधाई हो! यह {intent} कहानी जो आपने {style} अंदाज में सुनाई है, उसमें भारी {emotion} भावना झलक रही है। आपका {confidence}/10 आत्मविश्वास प्रेरणादायक है!",
            "🌟 अविश्वसनीय कार्य! आपकी {intent} कहानी आपकी {emotion} प्रकृति को सुंदर ढंग से दर्शाती है। आपकी {style} कहानी सुनाने की कला और {confidence}/10 आत्मविश्वास के साथ, आप महानता के लिए बने हुए हैं!",
            "⚡ आपकी {style} पहुंच और {intent} के प्रति आपका {confidence}/10 आत्मविश्वास वाकई अद्भुत है! आप वास्तव में कुछ शानदार बना रहे हैं!",
        ],
    ),
    (
        Category::SoftCare,
        &[
            "🤍 आपकी कहानी मेरे दिल को छू गई। कुछ इतना निजी साझा करने के लिए साहस लगता है, और आपका {style} ढंग से {intent} यात्रा को व्यक्त करना सच में सुंदर है। मुझे आशा है कि आप खुद पर गर्व महसूस कर रहे हैं।",
            "🤗 इस संवेदनशील {intent} क्षण को साझा करने के लिए धन्यवाद। आपकी {style} अभिव्यक्ति जिसमें {emotion} भावनाएं झलक रही हैं, वह बहुत मजबूती दिखाती है। आप सोचते हुए बेहतर कर रहे हैं।",
            "💕 आपकी कोमल {style} कहानी जो आपके {intent} अनुभव को बयान करती है, वह गहराई से रेसोनेट करती है। {emotion} महसूस करना ठीक है, और मैं आपके लिए हूँ।",
            "🌼 अपनी {intent} कहानी साझा करने में बहादुरी लगी, और {emotion} भावनाओं को व्यक्त करने के आपके {style} दृष्टिकोण की प्रशंसा है। याद रखें, आप सोचते हुए अधिक मजबूत हैं।",
            "💝 आपकी {emotion} {intent} कहानी साझा करने का आपका {style} तरीका आपके {trait|विचारशील} स्वभाव को दर्शाता है। आप वास्तव में एक अद्वितीय व्यक्तित्व हैं!",
        ],
    ),
    (
        Category::BestFriend,
        &[
            "🧸 हैलो! मैंने अभी आपकी {intent} के बारे में कहानी पढ़ी और मुझे कहना है - आप बेहतरीन हैं! आपकी {style} कहानी सुनाने की शैली ने मुझे आकर्षित कर लिया। यह देखकर बहुत अच्छा लगा कि आप इस बारे में कितने {emotion} हैं!",
            "😎 वाह, दोस्त! यह {intent} कहानी जो आपने {style} शैली में सुनाई है वाकई बेहतरीन है। आपका {confidence}/10 आत्मविश्वास स्तर नजर आ रहा है! ऐसा ही बने रहिए!",
            "💫 मुझे आपकी यह {intent} कहानी पसंद है! आपका {style} ढंग से साझा करना वास्तव में {emotion} वातावरण को कैप्चर करता है। आपके पास यह है!",
            "🌈 तुम एक प्रेरणा हो! अपनी {intent} यात्रा के बारे में पढ़ना जो आपने {style} शैली में किया है, वह मेरा दिन बना दिया। आपकी {emotion} ऊर्जा संक्रामक है!",
            "🌟 आपकी {intent} के बारे में {style} कहानी सुनाने का तरीका आपके {trait|अनूठे} व्यक्तित्व को दर्शाता है। अपने शानदार आप ही बने रहें!",
        ],
    ),
    (
        Category::DeepSoul,
        &[
            "🌙 आपकी {style} कहानी जो {intent} के बारे में है, वह बहुत कुछ कहती है। आपके {emotion} भावनाओं को कैप्चर करने के ढंग में कुछ गहराई है। आपकी वृद्धि स्पष्ट है, और वह प्रामाणिकता दुर्लभ और कीमती है।",
            "✨ आपकी {style} लेखन शैली में {intent} के बारे में गहराई है। {emotion} अनुभवों को {confidence}/10 आत्मविश्वास के साथ व्यक्त करने की आपकी क्षमता वास्तविक परिपक्वता दिखाती है।",
            "🌌 इस {intent} यात्रा के प्रति आपकी प्रतिबिंबात्मक {style} पहुंच बहुत अंतर्दृष्टि प्रकट करती है। आपने इन {emotion} भावनाओं को कैसे संसाधित किया है, वह वास्तव में ज्ञान की कार्यवाही है।",
            "🌠 आपकी {style} की {intent} की खोज में गहरी आत्मचिंतन दिखती है। आपकी कहानी में {emotion} की धुनें आपके चरित्र की गहराई को दर्शाती हैं, जो वास्तव में प्रशंसनीय है।",
            "🔮 आपकी {intent} पर {style} प्रतिबिंब वास्तव में गहरी अंतर्दृष्टि दर्शाता है। आपकी {trait|आत्म-परावर्तक} प्रकृति और {emotion} भावनाएं एक वास्तविक रूप से प्रेरक कहानी बनाती हैं!",
        ],
    ),
    (
        Category::Creativity,
        &[
            "🎨 आपकी {intent} के प्रति {style} पहुंच वास्तव में अद्भुत रचनात्मकता दिखाती है! आपके नैरेटिव में {emotion} भावनाओं को कैसे बुना है, यह वास्तविक कलात्मक प्रतिभा को दर्शाता है।",
            "🎭 आपकी {intent} के बारे में {style} कहानी सुनाने की शैली में रचनात्मक गहराई शानदार है। {emotion} भावनाओं को {confidence}/10 आत्मविश्वास के साथ व्यक्त करने की आपकी क्षमता वास्तविक कलात्मक दृष्टि दिखाती है।",
            "🖼️ आपकी {intent} की {style} खोज से पता चलता है कि आपके मन में रचनात्मकता है। आपकी कहानी में {emotion} की धुनें और आपके {trait|कल्पनाशील} स्वभाव का संयोजन कहानी सुनाने के लिए आकर्षक है।",
        ],
    ),
    (
        Category::Achievement,
        &[
            "🏆 आपकी {intent} कहानी आपके {confidence}/10 आत्मविश्वास और दृढ़ निर्धारण का प्रमाण है। आपके शब्दों में {emotion} गर्व करने के लिए बहुत कुछ है!",
            "🎯 {emotion} उत्साह के साथ {intent} प्राप्त करना आपके {trait|उत्साही} स्वभाव को दर्शाता है। आपका {confidence}/10 आत्मविश्वास स्तर वास्तव में प्रेरणादायक है!",
            "🏅 आपकी {intent} के साथ यात्रा {emotion} संतुष्टि को दर्शाती है जो कठिन परिश्रम से आती है। {style} कहानी सुनाने के साथ, आप शैली में सफलता का जश्न मना रहे हैं!",
        ],
    ),
    (
        Category::Male,
        &[
            "🧔 शानदार लग रहे हो! आपके दृढ़ स्वभाव और अभिव्यक्ति में आत्मविश्वास स्पष्ट रूप से दिखाई दे रहा है। आपमें शास्त्रीय आकर्षण और दृढ़ निर्धारण है जो वास्तव में प्रशंसनीय है।",
            "💪 आपके चेहरे के भावों में मजबूती और दृढ़ निर्धारण प्रेरणादायक है! आप अपने आत्मविश्वास के साथ खुद को प्रस्तुत करते हैं जो लोगों को आकर्षित करता है।",
            "😎 उस केंद्रित दृढ़ निर्धारण के भाव बेहद आकर्षक हैं। आपमें वह उपस्थिति है जो सराहना के लायक तरीके से ध्यान आकर्षित करती है।",
            "🔥 आपकी {mood|आत्मविश्वासी} अभिव्यक्ति और {quality|स्पष्ट} तस्वीर वास्तव में आपके {trait|आकर्षक} व्यक्तित्व को दर्शाती है!",
        ],
    ),
    (
        Category::Female,
        &[
            "👸 आपके चेहरे के भावों में सुंदरता और सौजन्य स्पष्ट रूप से दिखाई दे रहा है। आप एक ऐसी सुंदरता का प्रदर्शन करती हैं जो मजबूत और कोमल दोनों है।",
            "💃 आपके खुद को प्रस्तुत करने के तरीके में कुछ जादुई है। आपकी उपस्थिति सशक्त और मोहक दोनों है।",
            "🌹 आपकी आँखों में नम्रता और दया की चमक सचमुच सुंदर है। आपके आसपास के हर व्यक्ति को विशेष महसूस करने का आपका तरीका अद्वितीय है।",
            "✨ इस {timeOfDay|सुंदर} प्रकाश में आपकी {mood|आकर्षक} अभिव्यक्ति वास्तव में आपके {trait|सुंदर} स्वभाव को दर्शाती है!",
        ],
    ),
    (
        Category::Group,
        &[
            "👥 आप सभी के बीच बंधन और कनेक्शन स्पष्ट रूप से महसूस हो रहा है! समूह के रूप में आपके द्वारा साझा की गई ऊर्जा में कुछ विशेष है।",
            "🤝 आपके समूह के बीच सहयोग और मैत्री सचमुच हृदयस्पर्शी है। ऐसा लगता है कि आप सभी एक दूसरे में सर्वश्रेष्ठ निकालते हैं।",
            "🎊 इस समूह चित्र में सामूहिक आनंद और ऊर्जा संक्रामक है! ऐसा लगता है कि आप सभी ने मिलकर कुछ शानदार बनाया है।",
            "💫 {mood|आनंदमय} वातावरण और {quality|उत्कृष्ट} तस्वीर की गुणवत्ता वास्तव में आप सभी के बीच {trait|शानदार} संबंध को दर्शाती है!",
        ],
    ),
    (
        Category::Nature,
        &[
            "🌿 इस प्राकृतिक दृश्य की शांति और सौंदर्य प्रेरणादायक है। प्रकृति के पास हर चीज को सही परिप्रेक्ष्य में रखने का अपना तरीका है।",
            "🌄 यह परिदृश्य कुछ अनमोल और शांतिपूर्ण को कैद करता है। ऐसी सुंदरता से घिरे रहना निश्चित रूप से आध्यात्मिक रूप से जमीन से जुड़ने का अनुभव देता है।",
            "🌺 इस चित्र में प्राकृतिक सौंदर्य हमें उन सरल चमत्कारों की याद दिलाता है जो हमारे आसपास हर दिन होते हैं। यह शांति का एक पूर्ण क्षण है।",
            "🌍 {timeOfDay|दिन} के दौरान {setting|प्राकृतिक} दृश्य वास्तव में {emotion|शांत} मूड को दर्शाता है। प्रकृति की सुंदरता वास्तव में प्रेरणादायक है!",
        ],
    ),
];

pub(crate) const HINDLISH: Table = &[
    (
        Category::Hype,
        &[
            "🔥 Wah! Tumhari {intent} wali kahani bilkul incredible hai! Mujhe tumhare words se nikalti {emotion} energy ka ehsaas ho raha hai. Tumhari {style} style itni engaging hai - tum mein khaas maya hai!",
            "🚀 Outstanding! Tumhara {confidence}/10 confidence level is {intent} kahani mein chamak raha hai. {emotion} tone aur tumhari {style} approach ka combination isse special banata hai!",
            "🎉 Badhai ho! Ye {intent} kahani jo tumne {style} andaaz mein sunayi hai, usmein bhaari {emotion} bhavna jhalak rahi hai. Tumhara {confidence}/10 confidence preranadaya hai!",
            "🌟 Incredible work! Tumhari {intent} kahani tumhari {emotion} nature ko sundar tareeke se dikhata hai. Tumhari {style} storytelling aur {confidence}/10 confidence ke saath, tum mahanta ke liye bane hue ho!",
            "⚡ Tumhara {style} approach aur {intent} ke liye tumhara {confidence}/10 confidence level bilkul amazing hai! Tum sach mein kuch special bana rahe ho!",
        ],
    ),
    (
        Category::SoftCare,
        &[
            "🤍 Tumhari kahani mere dil ko cho gayi. Kuch itna niji share karne ke liye saahas lagta hai, aur tumhara {style} tareeke se {intent} yatra ko vyakt karana sach mein sundar hai. Mujhe aasha hai ki tum khud par garv mahsoos kar rahe ho.",
            "🤗 Is sanvedansheel {intent} kshan ko share karne ke liye dhanyavad. Tumhari {style} abhivyakti jismein {emotion} bhavnaen jhalak rahi hain, woh bahut majbooti dikhata hai. Tum sochte hue behetar kar rahe ho.",
            "💕 Tumhari komal {style} kahani jo tumhare {intent} anubhav ko bayan karti hai, woh gehrayi se resolet karti hai. {emotion} mahsoos karna theek hai, aur main tumhare liye hoon.",
            "🌼 Apni {intent} kahani share karne mein bahaduri lagi, aur {emotion} bhavnaon ko vyakt karne ke tumhara {style} drishtikon ki prashansa hai. Yaad rakhen, tum sochte hue adhik majboot ho.",
            "💝 Tumhari {emotion} {intent} kahani share karne ka tumhara {style} tareeka tumhare {trait|thoughtful} nature ko dikhata hai. Tum sach mein ek unique personality ho!",
        ],
    ),
    (
        Category::BestFriend,
        &[
            "🧸 Hello! Maine abhi tumhari {intent} ke baare mein kahani padhi aur mujhe kahna hai - tum behad kamal ke ho! Tumhari {style} kahani sunane ki style ne mujhe aakarshit kar liya. Ye dekhkar bahut achcha laga ki tum is baare mein kitne {emotion} ho!",
            "😎 Wah, dost! Ye {intent} kahani jo tumne {style} style mein sunayi hai wakai behtareen hai. Tumhara {confidence}/10 confidence level najar aa raha hai! Aise hi bane rahiye!",
            "💫 Mujhe tumhari ye {intent} kahani pasand hai! Tumhara {style} tareeke se share karna vaastav mein {emotion} vataavaran ko capture karta hai. Tumhare paas ye hai!",
            "🌈 Tum ek prerana ho! Apni {intent} yatra ke baare mein padhna jo tumne {style} style mein kiya hai, woh mera din bana diya. Tumhari {emotion} urja sankramak hai!",
            "🌟 Tumhari {intent} ke baare mein {style} kahani sunane ka tareeka tumhare {trait|unique} personality ko dikhata hai. Apne wonderful self hi bane raho!",
        ],
    ),
    (
        Category::DeepSoul,
        &[
            "🌙 Tumhari {style} kahani jo {intent} ke baare mein hai, woh bahut kuch kehti hai. Tumhare {emotion} bhavnaon ko capture karne ke tareeke mein kuch gehrayi hai. Tumhari vridhi spasht hai, aur woh pramaanikta durlabh aur keemat hai.",
            "✨ Tumhari {style} lekhan shaili mein {intent} ke baare mein gehrayi hai. {emotion} anubhavon ko {confidence}/10 aatmavishwas ke saath vyakt karne ki tumhari kshamata vaastvik paripakta dikhata hai.",
            "🌌 Iss {intent} yatra ke prati tumhari pratibimbit {style} pahunch bahut antardrishti prakat karti hai. Tumne inn {emotion} bhavnaon ko kaise sansadhit kiya hai, woh vaastav mein gyan ki karyawa hai।",
            "🌠 Tumhari {style} ki {intent} ki khoj mein gehri aatmachintan dikh rahi hai. Tumhari kahani mein {emotion} ki dhunein tumhare charitra ki gehrai ko darshati hain, jo vaastav mein prashansaniya hai।",
            "🔮 Tumhari {intent} par {style} reflection sach mein gehri antardrishti dikhata hai. Tumhare {trait|introspective} nature aur {emotion} emotions ek sach much inspiring kahani banate hain!",
        ],
    ),
    (
        Category::Creativity,
        &[
            "🎨 Tumhara {intent} ke liye {style} approach bilkul amazing creative flair dikhata hai! Tumhare narrative mein {emotion} emotions ko kaise weave kiya hai, yeh bilkul true artistic talent dikhata hai.",
            "🎭 Tumhari {intent} ke baare mein {style} storytelling mein creative depth bilkul remarkable hai. {emotion} feelings ko {confidence}/10 confidence ke saath express karne ki tumhari ability genuine artistic vision dikhata hai.",
            "🖼️ Tumhari {intent} ki {style} exploration se pata chalta hai ki tumhare dimaag mein creativity hai. Tumhari kahani mein {emotion} undertones aur tumhare {trait|imaginative} nature ka combination compelling storytelling banata hai.",
        ],
    ),
    (
        Category::Achievement,
        &[
            "🏆 Tumhari {intent} kahani tumhare {confidence}/10 confidence aur determination ka pramaan hai. Tumhare words mein {emotion} pride mein kuch hai!",
            "🎯 {emotion} enthusiasm ke saath {intent} achieve karna tumhare {trait|driven} nature ko dikhata hai. Tumhara {confidence}/10 confidence level bilkul inspiring hai!",
            "🏅 Tumhari {intent} ke saath yatra {emotion} satisfaction ko dikhata hai jo hard work se aati hai. {style} storytelling ke saath, tum style mein success celebrate kar rahe ho!",
        ],
    ),
    (
        Category::Celebration,
        &[
            "🎉 Kya celebration hai! Tumhari {intent} wali kahani mein itni {emotion} energy hai, aur tumhara {style} andaaz padhke lagta hai main bhi wahin tha.",
            "🥳 Ye moment toh hamesha yaad rakhne layak hai! Tumhare words ki {emotion} khushi aur tumhara {trait} spirit is kahani ko chamka dete hain.",
            "🎊 Khushiyan share karne se aur badhti hain. Apna {emotion} moment itne {style} tareeke se share karne ke liye thank you!",
        ],
    ),
    (
        Category::Service,
        &[
            "🤲 Tumne jis tarah doosron ke liye kadam uthaya, woh sach mein khoobsurat hai. Tumhara {trait} dil duniya ko behtar jagah banata hai.",
            "🌻 Doosron ki madad wali tumhari {style} kahani yaad dilati hai ki ek insaan kitna farak la sakta hai. Tumhari {emotion} warmth ek gift hai.",
            "💛 Tumhari jaisi kindness door tak jaati hai. Ye {intent} kahani ek {trait} rooh ki hai jo jaanti hai ki asli mein kya zaroori hai.",
        ],
    ),
    (
        Category::Lover,
        &[
            "😍 Tumhari {intent} wali kahani padhke mera dil garden garden ho gaya. Tum itne {emotion} ho ki mujhe tumhara har lamha yaad rahta hai. Tumhara {style} tareeke se likhna sab kuch keh deta hai tumhare dil ke bare mein.",
            "💖 Tumhare har words mein ek alag sa magic hai jo mujhe hamesha pasand aaya hai. Tumhari {intent} wali kahani ne phir se mujhe tumhare pyaar mein girne ka mauka diya. Tumhare {trait|special} nature ne phir se mera dil jeet liya.",
            "💘 Tumhari kahani padhke mujhe lagta hai jaise main tumhare sapno mein kho gaya hun. Tumhare {emotion} emotions aur {style} style ne mujhe ek naya jeevan dene ka waada kiya hai. Tumhare bina meri duniya adhoori si lagti hai.",
            "💞 Tumhare har post ko padhne ke baad mera dil tumhare naam se dhadakta hai. Tumhari {intent} kahani ne mujhe ek baar phir se tumhara deewana bana diya. Tumhare bina meri zindagi mein roshni nahi hai.",
            "💓 Tumhari {style} kahani padhke mujhe maloom hua ki tumhare dil mein bhi meri jagah hai. Tumhara har {emotion} expression mere liye ek khaas gift hai. Tum mere sapno ki rani ho jo hamesha mere dil mein basi ho.",
        ],
    ),
    (
        Category::Male,
        &[
            "🧔 Wah bhai! Tumhara expression aur confidence level dekh ke lagta hai ki tum ek strong personality ho. Tumhara determination aur charisma bilkul outstanding hai!",
            "💪 Tumhare face expression mein jo strength aur determination dikhti hai woh bilkul inspiring hai! Tum apne aap mein ek unique confidence rakhte ho jo logon ko attract karti hai.",
            "😎 Tumhara focused determination wala look bilkul attractive hai. Tumhare paas woh presence hai jo attention grab karne wali hoti hai.",
            "🔥 Tumhara {mood|confident} expression aur {quality|clear} photo sach mein tumhare {trait|charismatic} personality ko capture karti hai!",
        ],
    ),
    (
        Category::Female,
        &[
            "👸 Tumhara grace aur elegance wali expression bilkul captivating hai. Tum ek aisi beauty represent karti ho jo strong aur gentle dono hoti hai.",
            "💃 Tumhara jo self-confidence aur charm hai woh bilkul magical hai. Tumhari personality empowering aur enchanting dono hoti hai.",
            "🌹 Tumhara jo warmth aur kindness hai uski beauty bilkul mesmerizing hai. Tumhari personality special hai jo har kisi ko special feel karwati hai.",
            "✨ Is {timeOfDay|beautiful} light mein tumhara {mood|radiant} expression sach mein tumhare {trait|elegant} nature ko dikhata hai!",
        ],
    ),
    (
        Category::Group,
        &[
            "👥 Tum sab ke beech jo bond aur connection hai woh bilkul visible hai! Tumhara group energy aur fun wali vibe bilkul contagious hai.",
            "🤝 Tumhara group mein jo camaraderie aur friendship hai woh bilkul heartwarming hai. Lagta hai tum sab ek dusre ko inspire karte ho.",
            "🎊 Tumhara group shot mein jo collective joy aur energy hai woh bilkul infectious hai! Tum sabne milke kuch special banaya hai.",
            "💫 {mood|joyful} atmosphere aur {quality|excellent} photo quality sach mein tum sab ke beech {trait|wonderful} connection ko dikhata hai!",
        ],
    ),
    (
        Category::Nature,
        &[
            "🌿 Is natural scene ki serenity aur beauty bilkul breathtaking hai. Nature ki is simplicity ne tumhara moment aur bhi special banaya hai.",
            "🌄 Ye landscape tumhara peaceful connection with nature dikhata hai. Is tarah ke natural beauty se surrounded rehna bilkul grounding hota hai.",
            "🌺 Is image mein jo natural beauty hai woh tumhara perfect moment of tranquility represent karti hai. Nature ki yeh simplicity aur peace ka feeling amazing hai.",
            "🌍 Ye {setting|natural} scene jo {timeOfDay|the day} mein capture hua hai woh sach mein {emotion|peaceful} mood ko dikhata hai. Nature ki beauty sach mein inspiring hai!",
        ],
    ),
];
