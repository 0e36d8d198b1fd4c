//! Built-in fallback dataset: 52 Chinese cities with approximate
//! coordinates. Every city has a landmark; airports and high-speed
//! rail stations where the city actually has one.

use crate::costing::CostModel;
use crate::model::{NetworkBuilder, NodeKind, TransportNetwork};

struct RawCity {
    name: &'static str,
    landmark: (&'static str, f64, f64),
    airport: Option<(&'static str, f64, f64)>,
    hsr: Option<(&'static str, f64, f64)>,
}

#[rustfmt::skip]
const RAW_CITIES: &[RawCity] = &[
    RawCity { name: "Beijing", landmark: ("Forbidden City", 39.9163, 116.3972), airport: Some(("Capital International Airport", 40.0801, 116.5845)), hsr: Some(("Beijing South Station", 39.8652, 116.3786)) },
    RawCity { name: "Shanghai", landmark: ("The Bund", 31.2393, 121.4839), airport: Some(("Hongqiao International Airport", 31.1979, 121.3363)), hsr: Some(("Shanghai Hongqiao Station", 31.1946, 121.3267)) },
    RawCity { name: "Guangzhou", landmark: ("Canton Tower", 23.1065, 113.3246), airport: Some(("Baiyun International Airport", 23.3924, 113.2988)), hsr: Some(("Guangzhou South Station", 22.9904, 113.2642)) },
    RawCity { name: "Shenzhen", landmark: ("Window of the World", 22.5371, 113.9715), airport: Some(("Bao'an International Airport", 22.6392, 113.8106)), hsr: Some(("Shenzhen North Station", 22.6103, 114.0303)) },
    RawCity { name: "Chengdu", landmark: ("Kuanzhai Alley", 30.6700, 104.0600), airport: Some(("Shuangliu International Airport", 30.5785, 103.9471)), hsr: Some(("Chengdu East Station", 30.6593, 104.1413)) },
    RawCity { name: "Xi'an", landmark: ("Terracotta Army", 34.3851, 109.2792), airport: Some(("Xianyang International Airport", 34.4471, 108.7523)), hsr: Some(("Xi'an North Station", 34.3789, 108.9203)) },
    RawCity { name: "Hangzhou", landmark: ("West Lake", 30.2460, 120.1552), airport: Some(("Xiaoshan International Airport", 30.2295, 120.4342)), hsr: Some(("Hangzhou East Station", 30.2931, 120.2152)) },
    RawCity { name: "Wuhan", landmark: ("Yellow Crane Tower", 30.5463, 114.2934), airport: Some(("Tianhe International Airport", 30.7831, 114.2085)), hsr: Some(("Wuhan Station", 30.6100, 114.4239)) },
    RawCity { name: "Chongqing", landmark: ("Hongya Cave", 29.5630, 106.5516), airport: Some(("Jiangbei International Airport", 29.7195, 106.6417)), hsr: Some(("Chongqing West Station", 29.5085, 106.4560)) },
    RawCity { name: "Changsha", landmark: ("Orange Isle", 28.1947, 112.9828), airport: Some(("Huanghua International Airport", 28.1892, 113.2196)), hsr: Some(("Changsha South Station", 28.1518, 113.0612)) },
    // no high-speed rail
    RawCity { name: "Sanmenxia", landmark: ("Swan Lake", 34.7726, 111.1813), airport: Some(("Sanmenxia Airport", 34.5150, 111.1000)), hsr: None },
    // no airport
    RawCity { name: "Suzhou", landmark: ("Humble Administrator's Garden", 31.3233, 120.6267), airport: None, hsr: Some(("Suzhou Station", 31.3210, 120.6190)) },
    // neither airport nor high-speed rail
    RawCity { name: "Lishui", landmark: ("Jinyun Xiandu", 28.4563, 119.9220), airport: None, hsr: None },
    RawCity { name: "Tianjin", landmark: ("Tianjin Eye", 39.1423, 117.1767), airport: Some(("Binhai International Airport", 39.1249, 117.3624)), hsr: Some(("Tianjin West Station", 39.1556, 117.1593)) },
    RawCity { name: "Nanjing", landmark: ("Confucius Temple", 32.0293, 118.7881), airport: Some(("Lukou International Airport", 31.7420, 118.8622)), hsr: Some(("Nanjing South Station", 31.9867, 118.7954)) },
    RawCity { name: "Harbin", landmark: ("Central Street", 45.7567, 126.6424), airport: Some(("Taiping International Airport", 45.6234, 126.2503)), hsr: Some(("Harbin West Station", 45.6787, 126.6077)) },
    RawCity { name: "Qingdao", landmark: ("Zhanqiao Pier", 36.0671, 120.3826), airport: Some(("Jiaodong International Airport", 36.2715, 120.3740)), hsr: Some(("Qingdao North Station", 36.1750, 120.3730)) },
    RawCity { name: "Urumqi", landmark: ("Hongshan Park", 43.8280, 87.6170), airport: Some(("Diwopu International Airport", 43.9071, 87.4742)), hsr: Some(("Urumqi Station", 43.7940, 87.5650)) },
    RawCity { name: "Lhasa", landmark: ("Potala Palace", 29.6510, 91.1180), airport: Some(("Gonggar Airport", 29.2978, 90.9119)), hsr: Some(("Lhasa Station", 29.6390, 91.1511)) },
    RawCity { name: "Kunming", landmark: ("Dianchi Lake", 24.8822, 102.7123), airport: Some(("Changshui International Airport", 25.1019, 102.9292)), hsr: Some(("Kunming South Station", 24.9196, 102.6200)) },
    RawCity { name: "Guiyang", landmark: ("Jiaxiu Tower", 26.5711, 106.7076), airport: Some(("Longdongbao Airport", 26.5385, 106.8012)), hsr: Some(("Guiyang North Station", 26.6449, 106.7087)) },
    RawCity { name: "Lanzhou", landmark: ("Zhongshan Bridge", 36.0613, 103.8343), airport: Some(("Zhongchuan Airport", 36.5152, 103.6200)), hsr: Some(("Lanzhou West Station", 36.0570, 103.6900)) },
    RawCity { name: "Xining", landmark: ("Kumbum Monastery", 36.5023, 101.5692), airport: Some(("Caojiabu Airport", 36.5276, 102.0431)), hsr: Some(("Xining Station", 36.6285, 101.7574)) },
    RawCity { name: "Taiyuan", landmark: ("Jinci Temple", 37.7310, 112.4700), airport: Some(("Wusu Airport", 37.7485, 112.6283)), hsr: Some(("Taiyuan South Station", 37.7643, 112.6640)) },
    RawCity { name: "Zhengzhou", landmark: ("Shaolin Temple", 34.7466, 113.6254), airport: Some(("Xinzheng Airport", 34.5190, 113.8400)), hsr: Some(("Zhengzhou East Station", 34.7858, 113.7312)) },
    RawCity { name: "Shijiazhuang", landmark: ("Zhengding Ancient City", 38.0428, 114.5140), airport: Some(("Zhengding Airport", 38.2800, 114.6960)), hsr: Some(("Shijiazhuang Station", 38.0423, 114.4990)) },
    RawCity { name: "Fuzhou", landmark: ("Three Lanes and Seven Alleys", 26.0858, 119.2965), airport: Some(("Changle Airport", 25.9342, 119.6632)), hsr: Some(("Fuzhou Station", 26.0580, 119.3100)) },
    RawCity { name: "Xiamen", landmark: ("Gulangyu Island", 24.4798, 118.0894), airport: Some(("Gaoqi Airport", 24.5449, 118.1270)), hsr: Some(("Xiamen North Station", 24.7215, 118.0322)) },
    RawCity { name: "Nanchang", landmark: ("Tengwang Pavilion", 28.6829, 115.8582), airport: Some(("Changbei Airport", 28.8650, 115.8999)), hsr: Some(("Nanchang West Station", 28.6466, 115.8054)) },
    RawCity { name: "Hefei", landmark: ("Baogong Park", 31.8613, 117.2856), airport: Some(("Xinqiao Airport", 31.9912, 116.9740)), hsr: Some(("Hefei South Station", 31.8206, 117.3389)) },
    RawCity { name: "Ningbo", landmark: ("Tianyi Pavilion", 29.8683, 121.5440), airport: Some(("Lishe Airport", 29.8267, 121.4619)), hsr: Some(("Ningbo Station", 29.8668, 121.5443)) },
    RawCity { name: "Jinan", landmark: ("Baotu Spring", 36.6759, 117.0009), airport: Some(("Yaoqiang Airport", 36.8572, 117.2145)), hsr: Some(("Jinan West Station", 36.6824, 116.8752)) },
    RawCity { name: "Shenyang", landmark: ("Mukden Palace", 41.7957, 123.4328), airport: Some(("Taoxian Airport", 41.6418, 123.4840)), hsr: Some(("Shenyang North Station", 41.8138, 123.4331)) },
    RawCity { name: "Dalian", landmark: ("Xinghai Square", 38.8785, 121.5500), airport: Some(("Zhoushuizi Airport", 38.9657, 121.5381)), hsr: Some(("Dalian North Station", 38.9489, 121.6226)) },
    RawCity { name: "Haikou", landmark: ("Qilou Old Street", 20.0440, 110.3249), airport: Some(("Meilan Airport", 19.9349, 110.4584)), hsr: Some(("Haikou East Station", 20.0448, 110.3612)) },
    RawCity { name: "Sanya", landmark: ("Yalong Bay", 18.2528, 109.5120), airport: Some(("Phoenix International Airport", 18.3026, 109.4123)), hsr: Some(("Sanya Station", 18.2625, 109.4990)) },
    RawCity { name: "Nanning", landmark: ("Qingxiu Mountain", 22.8167, 108.3833), airport: Some(("Wuxu Airport", 22.6083, 108.1714)), hsr: Some(("Nanning East Station", 22.8130, 108.3730)) },
    RawCity { name: "Guilin", landmark: ("Li River", 25.2736, 110.2900), airport: Some(("Liangjiang Airport", 25.2181, 110.0392)), hsr: Some(("Guilin North Station", 25.3081, 110.3186)) },
    // no high-speed rail
    RawCity { name: "Zhuhai", landmark: ("Chimelong Ocean Kingdom", 22.1163, 113.5767), airport: Some(("Jinwan Airport", 22.0064, 113.3760)), hsr: None },
    // no high-speed rail
    RawCity { name: "Macau", landmark: ("Ruins of St. Paul's", 22.1987, 113.5439), airport: Some(("Macau International Airport", 22.1496, 113.5916)), hsr: None },
    RawCity { name: "Hong Kong", landmark: ("Victoria Harbour", 22.2830, 114.1588), airport: Some(("Chek Lap Kok Airport", 22.3080, 113.9185)), hsr: Some(("West Kowloon Station", 22.3040, 114.1600)) },
    RawCity { name: "Wenzhou", landmark: ("Jiangxin Island", 27.9960, 120.6994), airport: Some(("Longwan Airport", 27.9127, 120.8522)), hsr: Some(("Wenzhou South Station", 27.9300, 120.7160)) },
    RawCity { name: "Yinchuan", landmark: ("Sand Lake", 38.4672, 106.2737), airport: Some(("Hedong Airport", 38.3223, 106.3955)), hsr: Some(("Yinchuan Station", 38.4920, 106.1840)) },
    RawCity { name: "Hohhot", landmark: ("Dazhao Temple", 40.8118, 111.6586), airport: Some(("Baita Airport", 40.8514, 111.8240)), hsr: Some(("Hohhot East Station", 40.8218, 111.6710)) },
    // no airport
    RawCity { name: "Daqing", landmark: ("Iron Man Square", 46.5977, 125.0000), airport: None, hsr: Some(("Daqing Station", 46.5974, 125.1031)) },
    // no high-speed rail
    RawCity { name: "Yichang", landmark: ("Three Gorges Dam", 30.6919, 111.2865), airport: Some(("Sanxia Airport", 30.5555, 111.4848)), hsr: None },
    // neither airport nor high-speed rail
    RawCity { name: "Zigong", landmark: ("Dinosaur Museum", 29.3390, 104.7784), airport: None, hsr: None },
    // no airport
    RawCity { name: "Yangzhou", landmark: ("Slender West Lake", 32.3942, 119.4358), airport: None, hsr: Some(("Yangzhou East Station", 32.3750, 119.4600)) },
    // no airport
    RawCity { name: "Yiwu", landmark: ("International Trade City", 29.3060, 120.0768), airport: None, hsr: Some(("Yiwu Station", 29.3550, 120.0695)) },
    RawCity { name: "Quanzhou", landmark: ("Qingyuan Mountain", 24.9151, 118.5858), airport: Some(("Jinjiang Airport", 24.7964, 118.5893)), hsr: Some(("Quanzhou Station", 24.8960, 118.6000)) },
    // no airport
    RawCity { name: "Yueyang", landmark: ("Yueyang Tower", 29.3573, 113.1292), airport: None, hsr: Some(("Yueyang East Station", 29.4710, 113.1120)) },
    // no airport
    RawCity { name: "Jiujiang", landmark: ("Mount Lu", 29.7060, 116.0019), airport: None, hsr: Some(("Jiujiang Station", 29.7040, 115.9900)) },
];

/// The built-in dataset with the default cost model.
pub fn builtin_network() -> TransportNetwork {
    builtin_network_with_costing(CostModel::default())
}

pub fn builtin_network_with_costing(costing: CostModel) -> TransportNetwork {
    let mut builder = NetworkBuilder::with_costing(costing);
    for city in RAW_CITIES {
        let (name, lat, lon) = city.landmark;
        builder.add_node(city.name, NodeKind::Landmark, name, lat, lon);
        if let Some((name, lat, lon)) = city.airport {
            builder.add_node(city.name, NodeKind::Airport, name, lat, lon);
        }
        if let Some((name, lat, lon)) = city.hsr {
            builder.add_node(city.name, NodeKind::HsrStation, name, lat, lon);
        }
    }
    builder.build()
}
